/// First-person and hedging sentence openers, checked in this order.
pub const WEAK_OPENERS: &[&str] = &[
    "i am ",
    "i have ",
    "i did ",
    "i was ",
    "i worked ",
    "i helped ",
    "i made ",
    "i do ",
    "i like ",
    "i know ",
    "i learned ",
    "i can ",
    "i'm ",
    "my ",
];

/// Removes the first matching weak opener from the start of `sentence`.
///
/// Matching ignores ASCII case but the returned slice keeps the caller's
/// casing. At most one opener is removed.
pub fn strip_weak_opener(sentence: &str) -> &str {
    for opener in WEAK_OPENERS {
        let matches = sentence
            .get(..opener.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(opener));
        if matches {
            return &sentence[opener.len()..];
        }
    }
    sentence
}
