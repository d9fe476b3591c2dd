use super::*;

// [HandTiles]
// 副露(暗槓を含む)と立牌. 和了牌は含まない
// fixed_packs.len() * 3 + standing_tiles.len() <= 13
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HandRepr")]
pub struct HandTiles {
    pub fixed_packs: Vec<Pack>,   // 文字列上の出現順
    pub standing_tiles: Vec<Tile>, // 並び替えは行わない
}

impl HandTiles {
    #[inline]
    pub fn pack_count(&self) -> usize {
        self.fixed_packs.len()
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.standing_tiles.len()
    }

    // 副露に槓子が含まれるか
    pub fn contains_kong(&self) -> bool {
        self.fixed_packs.iter().any(|p| p.kind() == PackKind::Kong)
    }

    pub fn standing_contains(&self, tile: Tile) -> bool {
        self.standing_tiles.contains(&tile)
    }

    // 副露で使用されている指定牌の枚数
    pub fn count_in_fixed_packs(&self, tile: Tile) -> usize {
        self.fixed_packs
            .iter()
            .map(|p| p.tiles().iter().filter(|&&t| t == tile).count())
            .sum()
    }
}

#[derive(Deserialize)]
struct HandRepr {
    fixed_packs: Vec<Pack>,
    standing_tiles: Vec<Tile>,
}

impl TryFrom<HandRepr> for HandTiles {
    type Error = String;

    fn try_from(r: HandRepr) -> Result<Self, Self::Error> {
        let n_pack = r.fixed_packs.len();
        if n_pack > MAX_PACK {
            return Err(format!("too many fixed packs: {}", n_pack));
        }
        let n_tile = PACK_TILES * n_pack + r.standing_tiles.len();
        if n_tile > MAX_STANDING {
            return Err(format!("too many tiles: {}", n_tile));
        }
        Ok(Self {
            fixed_packs: r.fixed_packs,
            standing_tiles: r.standing_tiles,
        })
    }
}

#[test]
fn test_hand_queries() {
    let m = |r| Tile::new(SUIT_CHARACTERS, r);
    let hand = HandTiles {
        fixed_packs: vec![
            Pack::new(true, PackKind::Chow, m(3)),
            Pack::new(true, PackKind::Pung, m(4)),
            Pack::new(false, PackKind::Kong, TILE_P),
        ],
        standing_tiles: vec![m(9), m(9), TILE_E, TILE_E],
    };
    assert_eq!(hand.pack_count(), 3);
    assert_eq!(hand.tile_count(), 4);
    assert!(hand.contains_kong());
    assert!(hand.standing_contains(TILE_E));
    assert!(!hand.standing_contains(m(4)));
    assert_eq!(hand.count_in_fixed_packs(m(4)), 4);
    assert_eq!(hand.count_in_fixed_packs(m(2)), 1);
    assert_eq!(hand.count_in_fixed_packs(TILE_P), 4);
    assert_eq!(hand.count_in_fixed_packs(m(9)), 0);
}

#[test]
fn test_hand_default() {
    let hand = HandTiles::default();
    assert_eq!(hand.pack_count(), 0);
    assert!(!hand.contains_kong());
}

#[test]
fn test_hand_deserialize_limits() {
    let pung = r#"{"melded":true,"kind":"Pung","tile":17}"#;
    let json = |n_pack: usize, n_tile: usize| {
        format!(
            r#"{{"fixed_packs":[{}],"standing_tiles":[{}]}}"#,
            vec![pung; n_pack].join(","),
            vec!["18"; n_tile].join(",")
        )
    };

    let hand: HandTiles = serde_json::from_str(&json(4, 1)).unwrap();
    assert_eq!(hand.pack_count(), 4);
    assert_eq!(hand.tile_count(), 1);
    assert!(serde_json::from_str::<HandTiles>(&json(0, 13)).is_ok());

    assert!(serde_json::from_str::<HandTiles>(&json(5, 3)).is_err());
    assert!(serde_json::from_str::<HandTiles>(&json(4, 2)).is_err());
    assert!(serde_json::from_str::<HandTiles>(&json(0, 14)).is_err());
}
