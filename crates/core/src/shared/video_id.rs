/// Extract the video id from a watch URL.
///
/// Handles the `v=` query form (`https://x/watch?v=ID&list=...`) and the
/// shortened form (`https://youtu.be/ID?t=5`). Anything else is passed
/// through unchanged so callers can paste a bare id directly.
pub fn extract_video_id(input: &str) -> &str {
    if let Some(rest) = split_after(input, "v=") {
        return rest.split('&').next().unwrap_or(rest);
    }
    if let Some(rest) = split_after(input, "youtu.be/") {
        return rest.split('?').next().unwrap_or(rest);
    }
    input
}

fn split_after<'a>(input: &'a str, marker: &str) -> Option<&'a str> {
    input.find(marker).map(|idx| &input[idx + marker.len()..])
}
