use crate::artwork::{Artwork, UNKNOWN_YEAR};
use arte_connectors::sparql::Binding;

pub const MOVEMENT_PLACEHOLDER: &str = "Arte Clássica";
pub const TITLE_PLACEHOLDER: &str = "Sem título";
pub const ARTIST_PLACEHOLDER: &str = "Artista desconhecido";

/// Map one result row to an [`Artwork`].
///
/// Rows without an item URI or an image are skipped. Labels the label
/// service could not resolve come back as bare QIDs and are treated as
/// missing.
pub fn artwork_from_binding(binding: &Binding) -> Option<Artwork> {
    let id = binding
        .get("item")
        .and_then(|term| entity_id(&term.value))?
        .to_string();
    let image = binding
        .get("image")
        .map(|term| term.value.trim())
        .filter(|value| !value.is_empty())?
        .to_string();

    let year = binding
        .get("date")
        .and_then(|term| year_from_date(&term.value))
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

    Some(Artwork {
        title: label(binding, "itemLabel").unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
        artist: label(binding, "artistLabel").unwrap_or_else(|| ARTIST_PLACEHOLDER.to_string()),
        movement: Some(
            label(binding, "movementLabel").unwrap_or_else(|| MOVEMENT_PLACEHOLDER.to_string()),
        ),
        id,
        year,
        image,
        description: None,
    })
}

/// The trailing path segment of an entity URI.
fn entity_id(uri: &str) -> Option<&str> {
    uri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

fn label(binding: &Binding, var: &str) -> Option<String> {
    let value = binding.get(var)?.value.trim();
    if value.is_empty() || is_bare_qid(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_bare_qid(value: &str) -> bool {
    value
        .strip_prefix('Q')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// The calendar year of an `xsd:dateTime` value such as
/// `1503-01-01T00:00:00Z` or `-0500-01-01T00:00:00Z`.
pub fn year_from_date(value: &str) -> Option<String> {
    let value = value.trim();
    let (negative, rest) = match value.as_bytes().first().copied()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    match rest.as_bytes().get(digits.len()) {
        None | Some(b'-' | b'T') => {}
        Some(_) => return None,
    }
    let year: i64 = digits.parse().ok()?;
    Some(if negative && year != 0 {
        format!("-{year}")
    } else {
        year.to_string()
    })
}
