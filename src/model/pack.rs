use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackKind {
    Chow, // 順子
    Pung, // 刻子
    Kong, // 槓子
}

impl PackKind {
    const fn bits(self) -> u8 {
        match self {
            PackKind::Chow => PACK_CHOW,
            PackKind::Pung => PACK_PUNG,
            PackKind::Kong => PACK_KONG,
        }
    }
}

// [Pack]
// 12bit目以降: 副露フラグ (1:明, 0:暗)
// 8~11bit: 面子の種別
// 0~7bit: 代表牌 (順子の場合は真ん中の牌)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PackRepr", try_from = "PackRepr")]
pub struct Pack(u16);

impl Pack {
    #[inline]
    pub const fn new(melded: bool, kind: PackKind, tile: Tile) -> Self {
        Self(((melded as u16) << 12) | ((kind.bits() as u16) << 8) | tile.0 as u16)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    // 明刻, 明順, 明槓
    #[inline]
    pub const fn is_melded(self) -> bool {
        self.0 >> 12 != 0
    }

    pub const fn kind(self) -> PackKind {
        match ((self.0 >> 8) & 0x0F) as u8 {
            PACK_CHOW => PackKind::Chow,
            PACK_PUNG => PackKind::Pung,
            _ => PackKind::Kong,
        }
    }

    #[inline]
    pub const fn tile(self) -> Tile {
        Tile((self.0 & 0xFF) as u8)
    }

    // 面子を構成する牌を展開
    pub fn tiles(self) -> Vec<Tile> {
        let t = self.tile();
        match self.kind() {
            PackKind::Chow => {
                // 検証済みでない値でも桁あふれさせない
                vec![Tile(t.0.wrapping_sub(1)), t, Tile(t.0.wrapping_add(1))]
            }
            PackKind::Pung => vec![t; 3],
            PackKind::Kong => vec![t; 4],
        }
    }

    // 面子として成立し得る組み合わせか
    fn validate(melded: bool, kind: PackKind, tile: Tile) -> Result<Self, String> {
        if !tile.is_valid() {
            return Err(format!("invalid pack tile: {:?}", tile));
        }
        if kind == PackKind::Chow && !(tile.is_numbered() && 2 <= tile.rank() && tile.rank() <= 8) {
            return Err(format!("invalid chow middle tile: {:?}", tile));
        }
        Ok(Self::new(melded, kind, tile))
    }
}

impl fmt::Debug for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pack")
            .field("melded", &self.is_melded())
            .field("kind", &self.kind())
            .field("tile", &self.tile())
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
struct PackRepr {
    melded: bool,
    kind: PackKind,
    tile: Tile,
}

impl From<Pack> for PackRepr {
    fn from(p: Pack) -> Self {
        Self {
            melded: p.is_melded(),
            kind: p.kind(),
            tile: p.tile(),
        }
    }
}

impl TryFrom<PackRepr> for Pack {
    type Error = String;

    fn try_from(r: PackRepr) -> Result<Self, Self::Error> {
        Pack::validate(r.melded, r.kind, r.tile)
    }
}

#[test]
fn test_pack_bits() {
    let t = Tile::new(SUIT_BAMBOO, 4);
    let p = Pack::new(true, PackKind::Chow, t);
    assert_eq!(p.raw(), 0x1124);
    assert!(p.is_melded());
    assert_eq!(p.kind(), PackKind::Chow);
    assert_eq!(p.tile(), t);

    let k = Pack::new(false, PackKind::Kong, TILE_C);
    assert_eq!(k.raw(), 0x0345);
    assert!(!k.is_melded());
    assert_eq!(k.kind(), PackKind::Kong);
}

#[test]
fn test_pack_tiles() {
    let t = Tile::new(SUIT_DOTS, 5);
    let chow = Pack::new(true, PackKind::Chow, t).tiles();
    assert_eq!(chow, vec![Tile::new(SUIT_DOTS, 4), t, Tile::new(SUIT_DOTS, 6)]);
    assert_eq!(Pack::new(true, PackKind::Pung, TILE_E).tiles().len(), 3);
    assert_eq!(Pack::new(false, PackKind::Kong, TILE_E).tiles().len(), 4);

    let odd = Pack::new(true, PackKind::Chow, Tile(0)).tiles();
    assert_eq!(odd, vec![Tile(0xFF), Tile(0), Tile(1)]);
}

#[test]
fn test_pack_serde() {
    let p = Pack::new(false, PackKind::Pung, TILE_W);
    let s = serde_json::to_string(&p).unwrap();
    assert_eq!(s, r#"{"melded":false,"kind":"Pung","tile":67}"#);
    let p2: Pack = serde_json::from_str(&s).unwrap();
    assert_eq!(p, p2);

    // 字牌や端牌を中心とする順子は存在しない
    let bad = r#"{"melded":true,"kind":"Chow","tile":65}"#;
    assert!(serde_json::from_str::<Pack>(bad).is_err());
    let bad = r#"{"melded":true,"kind":"Chow","tile":17}"#;
    assert!(serde_json::from_str::<Pack>(bad).is_err());
}
