/// Sums the Phred value of every base in a quality string, using the
/// standard ASCII offset of 33.
///
/// Any byte is accepted; bytes below `!` contribute negative values rather
/// than erroring, so garbage input yields a garbage (but defined) score.
pub fn phred_sum(quality: &[u8]) -> i64 {
    quality.iter().map(|&b| b as i64 - 33).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_scores_zero() {
        assert_eq!(phred_sum(b""), 0);
    }

    #[test]
    fn known_quality_line() {
        // worked example: ! ' ' * ( ( ( ( -> 0 + 6 + 6 + 9 + 7*4
        assert_eq!(phred_sum(b"!''*(((("), 49);
    }

    #[test]
    fn single_characters() {
        assert_eq!(phred_sum(b"!"), 0);
        assert_eq!(phred_sum(b"I"), 40);
        assert_eq!(phred_sum(b"~"), 93);
    }

    #[test]
    fn sub_offset_characters_go_negative() {
        // a space is below the '!' offset
        assert_eq!(phred_sum(b" "), -1);
        assert_eq!(phred_sum(b"  !"), -2);
    }

    #[test]
    fn bytes_outside_ascii_still_score() {
        assert_eq!(phred_sum(&[0xff, 0xff]), 444);
        assert_eq!(phred_sum(&[0x00, 0x80]), -33 + 95);
    }

    #[test]
    fn matches_naive_sum() {
        let q = b"IIIIIIIIII5555@@@@!!";
        let expected: i64 = q.iter().map(|&b| b as i64 - 33).sum();
        assert_eq!(phred_sum(q), expected);
        assert_eq!(expected, 40 * 10 + 20 * 4 + 31 * 4);
    }
}
