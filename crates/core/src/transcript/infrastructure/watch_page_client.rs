use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use serde::Deserialize;

use crate::shared::constants::{BROWSER_USER_AGENT, CONSENT_COOKIE, WATCH_PAGE_URL};
use crate::transcript::domain::transcript_source::{EnumerationError, TranscriptSource};
use crate::transcript::domain::variant::{TranscriptOrigin, TranscriptVariant};
use crate::transcript::domain::variant_list::VariantList;

use super::timed_text_variant::TimedTextVariant;

const CAPTIONS_MARKER: &str = "\"captions\":";
const CAPTIONS_TERMINATOR: &str = ",\"videoDetails\"";

/// Enumerates caption tracks from the player response embedded in a video's
/// watch page.
///
/// The page carries the track list as a JSON blob between the `"captions":`
/// key and the `"videoDetails"` key; tracks marked `kind == "asr"` are
/// auto-generated, everything else is manually created.
pub struct WatchPageClient {
    http: Client,
}

impl WatchPageClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(BROWSER_USER_AGENT).build()?;
        Ok(Self { http })
    }
}

impl TranscriptSource for WatchPageClient {
    fn list_variants(&self, video_id: &str) -> Result<VariantList, EnumerationError> {
        let page = self
            .http
            .get(WATCH_PAGE_URL)
            .query(&[("v", video_id)])
            .header(COOKIE, CONSENT_COOKIE)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| EnumerationError::Http {
                video_id: video_id.to_string(),
                cause: e.to_string(),
            })?;

        let tracks = parse_caption_tracks(&page, video_id)?;
        log::debug!("video {video_id}: {} caption tracks listed", tracks.len());

        let mut manual: Vec<Box<dyn TranscriptVariant>> = Vec::new();
        let mut generated: Vec<Box<dyn TranscriptVariant>> = Vec::new();
        for track in tracks {
            let origin = track_origin(track.kind.as_deref());
            let variant = TimedTextVariant::new(
                self.http.clone(),
                track.language_code,
                track.base_url,
                origin,
            );
            match origin {
                TranscriptOrigin::ManuallyCreated => manual.push(Box::new(variant)),
                TranscriptOrigin::AutoGenerated => generated.push(Box::new(variant)),
            }
        }
        Ok(VariantList::new(manual, generated))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsBlock {
    player_captions_tracklist_renderer: TracklistRenderer,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    kind: Option<String>,
}

fn track_origin(kind: Option<&str>) -> TranscriptOrigin {
    if kind == Some("asr") {
        TranscriptOrigin::AutoGenerated
    } else {
        TranscriptOrigin::ManuallyCreated
    }
}

fn parse_caption_tracks(page: &str, video_id: &str) -> Result<Vec<CaptionTrack>, EnumerationError> {
    let start = page
        .find(CAPTIONS_MARKER)
        .ok_or_else(|| EnumerationError::NoCaptionData {
            video_id: video_id.to_string(),
        })?;
    let block = &page[start + CAPTIONS_MARKER.len()..];
    let end = block
        .find(CAPTIONS_TERMINATOR)
        .ok_or_else(|| EnumerationError::Malformed {
            video_id: video_id.to_string(),
            cause: "captions block is not terminated".to_string(),
        })?;

    let parsed: CaptionsBlock =
        serde_json::from_str(&block[..end]).map_err(|e| EnumerationError::Malformed {
            video_id: video_id.to_string(),
            cause: e.to_string(),
        })?;
    Ok(parsed.player_captions_tracklist_renderer.caption_tracks)
}
