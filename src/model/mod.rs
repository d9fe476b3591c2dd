// 牌・面子・手牌のデータモデル
mod define;
mod hand;
mod pack;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use hand::*;
pub use pack::*;
pub use tile::*;
