use super::*;

// 上位4bitが種別, 下位4bitが数字
// 種別の立っていない値はパース途中(後置の種別文字待ち)の場合にのみ存在する
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Tile(pub u8);

pub const TILE_E: Tile = Tile::new(SUIT_HONORS, WE); // 東
pub const TILE_S: Tile = Tile::new(SUIT_HONORS, WS); // 南
pub const TILE_W: Tile = Tile::new(SUIT_HONORS, WW); // 西
pub const TILE_N: Tile = Tile::new(SUIT_HONORS, WN); // 北
pub const TILE_C: Tile = Tile::new(SUIT_HONORS, DC); // 中
pub const TILE_F: Tile = Tile::new(SUIT_HONORS, DF); // 發
pub const TILE_P: Tile = Tile::new(SUIT_HONORS, DP); // 白

impl Tile {
    #[inline]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit | rank)
    }

    #[inline]
    pub const fn suit(self) -> Suit {
        self.0 & SUIT_MASK
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.0 & RANK_MASK
    }

    // 種別が確定しているか
    #[inline]
    pub const fn is_suited(self) -> bool {
        self.suit() != 0
    }

    // 数牌
    #[inline]
    pub const fn is_numbered(self) -> bool {
        matches!(self.suit(), SUIT_CHARACTERS | SUIT_BAMBOO | SUIT_DOTS)
    }

    // 字牌
    #[inline]
    pub const fn is_honor(self) -> bool {
        self.suit() == SUIT_HONORS
    }

    // 風牌
    #[inline]
    pub const fn is_wind(self) -> bool {
        self.is_honor() && self.rank() >= WE && self.rank() <= WN
    }

    // 三元牌
    #[inline]
    pub const fn is_dragon(self) -> bool {
        self.is_honor() && self.rank() >= DC && self.rank() <= DP
    }

    // 1,9牌
    #[inline]
    pub const fn is_terminal(self) -> bool {
        self.is_numbered() && (self.rank() == 1 || self.rank() == 9)
    }

    /// 種別と数字の組み合わせが実在する牌を指しているか
    pub const fn is_valid(self) -> bool {
        let r = self.rank();
        if self.is_numbered() {
            r >= 1 && r <= 9
        } else if self.is_honor() {
            r >= 1 && r <= 7
        } else {
            false
        }
    }

    // 1文字で表される字牌 (E,S,W,N,C,F,P)
    pub fn from_honor_letter(ch: char) -> Option<Self> {
        Some(match ch {
            'E' => TILE_E,
            'S' => TILE_S,
            'W' => TILE_W,
            'N' => TILE_N,
            'C' => TILE_C,
            'F' => TILE_F,
            'P' => TILE_P,
            _ => return None,
        })
    }
}

// 後置の種別文字 (m,s,p,z)
pub fn suit_from_char(ch: char) -> Option<Suit> {
    match ch {
        'm' => Some(SUIT_CHARACTERS),
        's' => Some(SUIT_BAMBOO),
        'p' => Some(SUIT_DOTS),
        'z' => Some(SUIT_HONORS),
        _ => None,
    }
}

// 数字文字 ('0'は赤5だが通常の5と同じ値になる)
pub fn rank_from_char(ch: char) -> Option<Rank> {
    match ch {
        '0' => Some(5),
        '1'..='9' => ch.to_digit(10).map(|d| d as Rank),
        _ => None,
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({:#04x})", self.0)
    }
}

impl From<Tile> for u8 {
    fn from(t: Tile) -> Self {
        t.0
    }
}

impl TryFrom<u8> for Tile {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        let t = Tile(v);
        if t.is_valid() {
            Ok(t)
        } else {
            Err(format!("invalid tile value: {:#04x}", v))
        }
    }
}

#[test]
fn test_tile_fields() {
    let t = Tile::new(SUIT_DOTS, 7);
    assert_eq!(t.0, 0x37);
    assert_eq!(t.suit(), SUIT_DOTS);
    assert_eq!(t.rank(), 7);
    assert!(t.is_numbered());
    assert!(!t.is_honor());
    assert!(!Tile(5).is_suited());
}

#[test]
fn test_honor_constants() {
    let honors = [TILE_E, TILE_S, TILE_W, TILE_N, TILE_C, TILE_F, TILE_P];
    for (i, t) in honors.iter().enumerate() {
        assert_eq!(t.0, 0x41 + i as u8);
        assert!(t.is_valid());
    }
    assert!(TILE_N.is_wind() && !TILE_N.is_dragon());
    assert!(TILE_C.is_dragon() && !TILE_C.is_wind());
    assert_eq!(Tile::from_honor_letter('F'), Some(TILE_F));
    assert_eq!(Tile::from_honor_letter('m'), None);
}

#[test]
fn test_tile_validity() {
    assert!(Tile::new(SUIT_BAMBOO, 9).is_valid());
    assert!(Tile::new(SUIT_CHARACTERS, 1).is_terminal());
    assert!(!Tile::new(SUIT_HONORS, 8).is_valid());
    assert!(!Tile::new(SUIT_CHARACTERS, 0).is_valid());
    assert!(Tile::try_from(0x50u8).is_err());
    assert_eq!(rank_from_char('0'), Some(5));
    assert_eq!(rank_from_char('a'), None);
    assert_eq!(suit_from_char('z'), Some(SUIT_HONORS));
}

#[test]
fn test_tile_serde() {
    let t = Tile::new(SUIT_CHARACTERS, 3);
    assert_eq!(serde_json::to_string(&t).unwrap(), "19");
    let t2: Tile = serde_json::from_str("19").unwrap();
    assert_eq!(t, t2);
    assert!(serde_json::from_str::<Tile>("72").is_err());
}
