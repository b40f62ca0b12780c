//! Raw tag reading
//!
//! [`TagReader`] is the only I/O boundary of the batch normalizer: one call per
//! path, returning the file's raw tags under lowercase names or a classified
//! [`ReadError`].
//!
//! [`LoftyTagReader`] is the production reader. It uses lofty to probe and read
//! the file, merges every tag block found (primary tag first), and exposes the
//! audio properties as tags (`lengthinmilliseconds`, `bitrate`, `samplerate`,
//! `channels`).

use crate::error::ReadError;
use crate::models::TagMap;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{ItemKey, ItemValue, Tag, TagType};
use std::sync::Arc;
use tracing::debug;

/// Produces raw tags for one file
///
/// Returned tag names must be lowercase.
pub trait TagReader: Send + Sync {
    fn read(&self, path: &str) -> Result<TagMap, ReadError>;
}

impl<R: TagReader + ?Sized> TagReader for &R {
    fn read(&self, path: &str) -> Result<TagMap, ReadError> {
        (**self).read(path)
    }
}

impl<R: TagReader + ?Sized> TagReader for Box<R> {
    fn read(&self, path: &str) -> Result<TagMap, ReadError> {
        (**self).read(path)
    }
}

impl<R: TagReader + ?Sized> TagReader for Arc<R> {
    fn read(&self, path: &str) -> Result<TagMap, ReadError> {
        (**self).read(path)
    }
}

/// Tag reader backed by lofty
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl LoftyTagReader {
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for LoftyTagReader {
    fn read(&self, path: &str) -> Result<TagMap, ReadError> {
        let tagged_file = Probe::open(path)
            .map_err(classify_lofty_error)?
            .guess_file_type()
            .map_err(classify_io_error)?
            .read()
            .map_err(classify_lofty_error)?;

        let properties = tagged_file.properties();
        if properties.sample_rate().is_none() && properties.duration().is_zero() {
            return Err(ReadError::NoAudioProperties);
        }

        let mut tags = collect_tags(&tagged_file);

        tags.insert(
            "lengthinmilliseconds",
            vec![properties.duration().as_millis().to_string()],
        );
        if let Some(bitrate) = properties.audio_bitrate() {
            tags.insert("bitrate", vec![bitrate.to_string()]);
        }
        if let Some(sample_rate) = properties.sample_rate() {
            tags.insert("samplerate", vec![sample_rate.to_string()]);
        }
        if let Some(channels) = properties.channels() {
            tags.insert("channels", vec![channels.to_string()]);
        }
        if tagged_file.tags().iter().any(|tag| tag.picture_count() > 0) {
            tags.insert("has_picture", vec!["true".to_string()]);
        }

        debug!(
            file = %path,
            file_type = ?tagged_file.file_type(),
            tag_count = tags.len(),
            "Read raw tags"
        );

        Ok(tags)
    }
}

/// Merge all tag blocks of a file
///
/// The primary tag wins: later blocks only contribute names it does not carry,
/// so an ID3v1 copy never duplicates ID3v2 values.
fn collect_tags(tagged_file: &TaggedFile) -> TagMap {
    let primary_type = tagged_file.primary_tag().map(|tag| tag.tag_type());
    let ordered = tagged_file.primary_tag().into_iter().chain(
        tagged_file
            .tags()
            .iter()
            .filter(|tag| Some(tag.tag_type()) != primary_type),
    );

    let mut merged = TagMap::new();
    for tag in ordered {
        for (name, values) in tag_items(tag) {
            if !merged.contains_key(&name) {
                merged.insert(name, values);
            }
        }
    }
    merged
}

fn tag_items(tag: &Tag) -> TagMap {
    let mut items = TagMap::new();
    for item in tag.items() {
        let Some(name) = property_name(item.key(), tag.tag_type()) else {
            continue;
        };
        let value = match item.value() {
            ItemValue::Text(text) | ItemValue::Locator(text) => text.clone(),
            _ => continue,
        };
        items.push(name, value);
    }
    items
}

/// Lowercase property name for a lofty item key
///
/// Well-known keys use TagLib property names so sort-order frames land under
/// `titlesort`, `albumsort` and `artistsort`.
fn property_name(key: &ItemKey, tag_type: TagType) -> Option<String> {
    let name = match key {
        ItemKey::TrackTitle => "title",
        ItemKey::TrackTitleSortOrder => "titlesort",
        ItemKey::AlbumTitle => "album",
        ItemKey::AlbumTitleSortOrder => "albumsort",
        ItemKey::TrackArtist => "artist",
        ItemKey::TrackArtistSortOrder => "artistsort",
        ItemKey::AlbumArtist => "albumartist",
        ItemKey::AlbumArtistSortOrder => "albumartistsort",
        ItemKey::TrackNumber => "tracknumber",
        ItemKey::TrackTotal => "tracktotal",
        ItemKey::DiscNumber => "discnumber",
        ItemKey::DiscTotal => "disctotal",
        ItemKey::Genre => "genre",
        ItemKey::RecordingDate => "date",
        ItemKey::Composer => "composer",
        ItemKey::Comment => "comment",
        ItemKey::Lyrics => "lyrics",
        ItemKey::Label => "label",
        ItemKey::Bpm => "bpm",
        ItemKey::FlagCompilation => "compilation",
        ItemKey::MusicBrainzRecordingId => "musicbrainz_trackid",
        ItemKey::MusicBrainzReleaseId => "musicbrainz_albumid",
        ItemKey::MusicBrainzArtistId => "musicbrainz_artistid",
        ItemKey::Unknown(raw) => return Some(raw.to_lowercase()),
        other => return other.map_key(tag_type, true).map(str::to_lowercase),
    };
    Some(name.to_string())
}

fn classify_lofty_error(err: LoftyError) -> ReadError {
    match err.kind() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
            ReadError::NoPermission
        }
        ErrorKind::Io(io) => ReadError::Io(std::io::Error::new(io.kind(), err.to_string())),
        _ => ReadError::CannotParse(err.to_string()),
    }
}

fn classify_io_error(err: std::io::Error) -> ReadError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        ReadError::NoPermission
    } else {
        ReadError::Io(err)
    }
}
