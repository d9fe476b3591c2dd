use thiserror::Error;

// 旧来の数値ステータスコード (0: 成功, 負数: エラー)
pub const PARSE_NO_ERROR: i32 = 0;
pub const PARSE_ERROR_ILLEGAL_CHARACTER: i32 = -1;
pub const PARSE_ERROR_NO_SUFFIX_AFTER_DIGIT: i32 = -2;
pub const PARSE_ERROR_TOO_MANY_TILES_FOR_FIXED_PACK: i32 = -3;
pub const PARSE_ERROR_CANNOT_MAKE_FIXED_PACK: i32 = -4;
pub const PARSE_ERROR_TOO_MANY_FIXED_PACKS: i32 = -5;

/// 手牌文字列のパースエラー
///
/// `pos` は違反を検出した位置 (入力文字列のバイトオフセット)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("illegal character at {pos}")]
    IllegalCharacter { pos: usize },
    #[error("no suit suffix after digit at {pos}")]
    NoSuffixAfterDigit { pos: usize },
    #[error("wrong number of tiles for a fixed pack at {pos}")]
    TooManyTilesForFixedPack { pos: usize },
    #[error("cannot make a fixed pack at {pos}")]
    CannotMakeFixedPack { pos: usize },
    #[error("too many fixed packs at {pos}")]
    TooManyFixedPacks { pos: usize },
}

impl ParseError {
    pub fn code(&self) -> i32 {
        match self {
            ParseError::IllegalCharacter { .. } => PARSE_ERROR_ILLEGAL_CHARACTER,
            ParseError::NoSuffixAfterDigit { .. } => PARSE_ERROR_NO_SUFFIX_AFTER_DIGIT,
            ParseError::TooManyTilesForFixedPack { .. } => {
                PARSE_ERROR_TOO_MANY_TILES_FOR_FIXED_PACK
            }
            ParseError::CannotMakeFixedPack { .. } => PARSE_ERROR_CANNOT_MAKE_FIXED_PACK,
            ParseError::TooManyFixedPacks { .. } => PARSE_ERROR_TOO_MANY_FIXED_PACKS,
        }
    }

    pub fn pos(&self) -> usize {
        match *self {
            ParseError::IllegalCharacter { pos }
            | ParseError::NoSuffixAfterDigit { pos }
            | ParseError::TooManyTilesForFixedPack { pos }
            | ParseError::CannotMakeFixedPack { pos }
            | ParseError::TooManyFixedPacks { pos } => pos,
        }
    }
}

#[test]
fn test_error_codes() {
    assert_eq!(ParseError::IllegalCharacter { pos: 0 }.code(), -1);
    assert_eq!(ParseError::NoSuffixAfterDigit { pos: 0 }.code(), -2);
    assert_eq!(ParseError::TooManyTilesForFixedPack { pos: 0 }.code(), -3);
    assert_eq!(ParseError::CannotMakeFixedPack { pos: 0 }.code(), -4);
    assert_eq!(ParseError::TooManyFixedPacks { pos: 0 }.code(), -5);
    assert_ne!(ParseError::TooManyFixedPacks { pos: 0 }.code(), PARSE_NO_ERROR);
}

#[test]
fn test_error_message() {
    let e = ParseError::CannotMakeFixedPack { pos: 4 };
    assert_eq!(e.to_string(), "cannot make a fixed pack at 4");
    assert_eq!(e.pos(), 4);
}
