use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One lojong slogan and the point of training it belongs to.
///
/// The scheduler only cares about a card's position in the deck; these fields
/// are carried through untouched for whoever renders the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{lojong_num}. {lojong_title}")]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub point_num:    String,
    pub point_title:  String,
    pub lojong_num:   u32,
    pub lojong_title: String,
}

impl Card {
    pub fn new(
        point_num: impl Into<String>,
        point_title: impl Into<String>,
        lojong_num: u32,
        lojong_title: impl Into<String>,
    ) -> Self {
        Self {
            point_num: point_num.into(),
            point_title: point_title.into(),
            lojong_num,
            lojong_title: lojong_title.into(),
        }
    }
}
