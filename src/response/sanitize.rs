//! Vendor boilerplate removal.

/// Substrings the hosted endpoint appends to model output.
///
/// Removed in this order, so the longer attribution forms go before the bare
/// provider token they contain.
pub const BOILERPLATE: [&str; 5] = [
    "Powered by Pollinations.AI",
    "Support our mission",
    "https://pollinations.ai",
    "pollinations.ai",
    "pollinations",
];

/// Strip [`BOILERPLATE`] from a raw response body and trim surrounding whitespace.
///
/// Removal is literal and unconditional: a boilerplate string that occurs inside
/// legitimate model output is removed as well.
pub fn sanitize_response(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in BOILERPLATE {
        if cleaned.contains(pattern) {
            cleaned = cleaned.replace(pattern, "");
        }
    }
    cleaned.trim().to_string()
}
