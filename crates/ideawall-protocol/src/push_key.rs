//! Push-key timestamp decoding.

use log::warn;

/// Base-64 digit alphabet used by store push keys, in digit order.
const PUSH_ALPHABET: &str = "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Number of leading key characters that encode the timestamp.
const TIMESTAMP_CHARS: usize = 8;

/// Decode the creation timestamp embedded in a store push key.
///
/// The first eight characters (fewer for short keys) are folded
/// left-to-right as base-64 digits over [`PUSH_ALPHABET`], yielding the
/// epoch-millisecond write time for well-formed keys. The function is
/// total: characters outside the alphabet contribute `-1`, so malformed
/// keys decode to meaningless (possibly negative) values instead of
/// failing. Out-of-alphabet characters are logged as a data-quality
/// signal.
pub fn decode_push_key(key: &str) -> i64 {
    let mut timestamp: i64 = 0;
    for ch in key.chars().take(TIMESTAMP_CHARS) {
        let digit = match PUSH_ALPHABET.find(ch) {
            Some(index) => index as i64,
            None => {
                warn!("out-of-alphabet character in push key (char={ch:?})");
                -1
            }
        };
        timestamp = timestamp * 64 + digit;
    }
    timestamp
}

#[cfg(test)]
mod tests {
    use super::decode_push_key;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_is_deterministic() {
        let key = "-OaBcDeFgHiJkLmNoPqR";
        assert_eq!(decode_push_key(key), decode_push_key(key));
    }

    #[test]
    fn all_zero_digits_fold_to_zero() {
        // '-' is digit 0 in the push alphabet.
        assert_eq!(decode_push_key("--------"), 0);
    }

    #[test]
    fn single_highest_digit_folds_to_63() {
        assert_eq!(decode_push_key("z"), 63);
    }

    #[test]
    fn folds_positionally() {
        // "0-" is digit 1 followed by digit 0.
        assert_eq!(decode_push_key("0-"), 64);
        assert_eq!(decode_push_key("z-------"), 63 * 64_i64.pow(7));
    }

    #[test]
    fn ignores_characters_past_the_eighth() {
        assert_eq!(
            decode_push_key("-OaBcDeF"),
            decode_push_key("-OaBcDeFgHiJkLmNoPqR")
        );
    }

    #[test]
    fn short_keys_fold_available_characters_only() {
        assert_eq!(decode_push_key(""), 0);
        assert_eq!(decode_push_key("0"), 1);
    }

    #[test]
    fn out_of_alphabet_characters_contribute_minus_one() {
        assert_eq!(decode_push_key("!"), -1);
        // Still deterministic for garbage input.
        assert_eq!(decode_push_key("!!~~"), decode_push_key("!!~~"));
    }

    #[test]
    fn real_shaped_key_decodes_to_positive_millis() {
        // Keys minted by the store in this era decode into the 1.6e12 range.
        let decoded = decode_push_key("-OaBcDeFgHiJkLmNoPqR");
        assert!(decoded > 0, "decoded {decoded}");
    }
}
