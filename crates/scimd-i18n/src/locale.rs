/// Parse an Accept-Language header into base locales sorted by quality
///
/// Region subtags are stripped (`en-US` becomes `en`); entries without a
/// `q=` weight default to 1.0.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut entries: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let locale = pieces.next()?.trim().split('-').next()?.to_ascii_lowercase();
            if locale.is_empty() {
                return None;
            }

            let quality = pieces
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            Some((locale, quality))
        })
        .collect();

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(locale, _)| locale).collect()
}
