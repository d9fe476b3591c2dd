// 型エイリアス
pub type Suit = u8; // 牌の種別部分 (上位4bit)
pub type Rank = u8; // 牌の数字部分 (下位4bit, 数牌:1~9, 字牌:1~7)

// Number
pub const MAX_PACK: usize = 4; // 副露(暗槓を含む)の最大数
pub const MAX_STANDING: usize = 13; // 立牌の最大数 (副露なしの場合)
pub const MAX_BUFFER: usize = 14; // 1回のパースで保持できる牌の最大数 (立牌 + 和了牌)
pub const PACK_TILES: usize = 3; // 面子1つが消費する立牌の数 (槓子も3枚分として扱う)

// Suit
pub const SUIT_MASK: u8 = 0xF0;
pub const RANK_MASK: u8 = 0x0F;
pub const SUIT_CHARACTERS: Suit = 0x10; // 萬子 (m)
pub const SUIT_BAMBOO: Suit = 0x20; // 索子 (s)
pub const SUIT_DOTS: Suit = 0x30; // 筒子 (p)
pub const SUIT_HONORS: Suit = 0x40; // 字牌 (z)

// Honor Rank
pub const WE: Rank = 1; // Wind:   East  (東)
pub const WS: Rank = 2; // Wind:   South (南)
pub const WW: Rank = 3; // Wind:   West  (西)
pub const WN: Rank = 4; // Wind:   North (北)
pub const DC: Rank = 5; // Dragon: Red   (中)
pub const DF: Rank = 6; // Dragon: Green (發)
pub const DP: Rank = 7; // Dragon: White (白)

// Pack Kind (面子の種別, packの8~11bit)
pub const PACK_CHOW: u8 = 1; // 順子
pub const PACK_PUNG: u8 = 2; // 刻子
pub const PACK_KONG: u8 = 3; // 槓子
