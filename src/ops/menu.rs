use serde::Serialize;

use crate::model::card::PALETTE;
use crate::model::locale::Locale;
use crate::ops::status_ops;
use crate::store::SyncedStore;

pub const TOGGLE_COLLAPSED: &str = "toggle-collapsed";
pub const COLOR: &str = "color";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub tooltip: String,
    pub option: String,
}

/// An entry of the host's property menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "itemType", rename_all = "kebab-case")]
pub enum MenuItem {
    #[serde(rename_all = "camelCase")]
    Toggle {
        tooltip: String,
        property_name: String,
        is_toggled: bool,
    },
    #[serde(rename_all = "camelCase")]
    ColorSelector {
        tooltip: String,
        property_name: String,
        options: Vec<ColorOption>,
        selected_option: String,
    },
}

/// What a property change did to the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Collapsed(bool),
    ColorSet(String),
    Ignored,
}

/// Build the property menu for the card's current state
pub fn menu_items<S: SyncedStore + ?Sized>(store: &S, locale: Locale) -> Vec<MenuItem> {
    let collapsed = status_ops::is_collapsed(store);
    vec![
        MenuItem::Toggle {
            tooltip: locale.collapse_tooltip(collapsed).to_string(),
            property_name: TOGGLE_COLLAPSED.to_string(),
            is_toggled: false,
        },
        MenuItem::ColorSelector {
            tooltip: locale.color_tooltip().to_string(),
            property_name: COLOR.to_string(),
            options: PALETTE
                .iter()
                .map(|c| ColorOption {
                    tooltip: c.to_string(),
                    option: c.to_string(),
                })
                .collect(),
            selected_option: status_ops::color(store),
        },
    ]
}

/// Apply a property-menu selection reported by the host
pub fn apply_property<S: SyncedStore + ?Sized>(
    store: &mut S,
    property_name: &str,
    value: Option<&str>,
) -> MenuOutcome {
    match (property_name, value) {
        (TOGGLE_COLLAPSED, _) => MenuOutcome::Collapsed(status_ops::toggle_collapsed(store)),
        (COLOR, Some(color)) => {
            status_ops::set_color(store, color);
            MenuOutcome::ColorSet(color.to_string())
        }
        _ => {
            log::debug!(
                "[taskcard.menu] ignored property {:?} value {:?}",
                property_name,
                value
            );
            MenuOutcome::Ignored
        }
    }
}
