//! Phrase keys used by the built-in dictionaries.
//!
//! The key set is open: callers may register dictionaries with any keys,
//! these are just the ones the bundled UI phrase tables know about.

// ==================== Context Menu ====================

pub const CONTEXTMENU_ITEMS_ROW_ABOVE: &str = "ContextMenu:items.insertRowAbove";
pub const CONTEXTMENU_ITEMS_ROW_BELOW: &str = "ContextMenu:items.insertRowBelow";
pub const CONTEXTMENU_ITEMS_INSERT_LEFT: &str = "ContextMenu:items.insertColumnOnTheLeft";
pub const CONTEXTMENU_ITEMS_INSERT_RIGHT: &str = "ContextMenu:items.insertColumnOnTheRight";
pub const CONTEXTMENU_ITEMS_REMOVE_ROW: &str = "ContextMenu:items.removeRow";
pub const CONTEXTMENU_ITEMS_REMOVE_COLUMN: &str = "ContextMenu:items.removeColumn";
pub const CONTEXTMENU_ITEMS_UNDO: &str = "ContextMenu:items.undo";
pub const CONTEXTMENU_ITEMS_REDO: &str = "ContextMenu:items.redo";
pub const CONTEXTMENU_ITEMS_READ_ONLY: &str = "ContextMenu:items.readOnly";
pub const CONTEXTMENU_ITEMS_CLEAR_COLUMN: &str = "ContextMenu:items.clearColumn";
pub const CONTEXTMENU_ITEMS_COPY: &str = "ContextMenu:items.copy";
pub const CONTEXTMENU_ITEMS_CUT: &str = "ContextMenu:items.cut";

pub const CONTEXTMENU_ITEMS_ALIGNMENT: &str = "ContextMenu:items.align";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_LEFT: &str = "ContextMenu:items.align.left";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_CENTER: &str = "ContextMenu:items.align.center";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_RIGHT: &str = "ContextMenu:items.align.right";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_JUSTIFY: &str = "ContextMenu:items.align.justify";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_TOP: &str = "ContextMenu:items.align.top";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_MIDDLE: &str = "ContextMenu:items.align.middle";
pub const CONTEXTMENU_ITEMS_ALIGNMENT_BOTTOM: &str = "ContextMenu:items.align.bottom";

// ==================== Filters: Conditions ====================

pub const FILTERS_CONDITIONS_NONE: &str = "Filters:conditions.none";
pub const FILTERS_CONDITIONS_EMPTY: &str = "Filters:conditions.isEmpty";
pub const FILTERS_CONDITIONS_NOT_EMPTY: &str = "Filters:conditions.isNotEmpty";
pub const FILTERS_CONDITIONS_EQUAL: &str = "Filters:conditions.isEqualTo";
pub const FILTERS_CONDITIONS_NOT_EQUAL: &str = "Filters:conditions.isNotEqualTo";
pub const FILTERS_CONDITIONS_BEGINS_WITH: &str = "Filters:conditions.beginsWith";
pub const FILTERS_CONDITIONS_ENDS_WITH: &str = "Filters:conditions.endsWith";
pub const FILTERS_CONDITIONS_CONTAINS: &str = "Filters:conditions.contains";
pub const FILTERS_CONDITIONS_NOT_CONTAIN: &str = "Filters:conditions.doesNotContain";
pub const FILTERS_CONDITIONS_BY_VALUE: &str = "Filters:conditions.byValue";
pub const FILTERS_CONDITIONS_GREATER_THAN: &str = "Filters:conditions.greaterThan";
pub const FILTERS_CONDITIONS_GREATER_THAN_OR_EQUAL: &str = "Filters:conditions.greaterThanOrEqualTo";
pub const FILTERS_CONDITIONS_LESS_THAN: &str = "Filters:conditions.lessThan";
pub const FILTERS_CONDITIONS_LESS_THAN_OR_EQUAL: &str = "Filters:conditions.lessThanOrEqualTo";
pub const FILTERS_CONDITIONS_BETWEEN: &str = "Filters:conditions.isBetween";
pub const FILTERS_CONDITIONS_NOT_BETWEEN: &str = "Filters:conditions.isNotBetween";
pub const FILTERS_CONDITIONS_AFTER: &str = "Filters:conditions.after";
pub const FILTERS_CONDITIONS_BEFORE: &str = "Filters:conditions.before";
pub const FILTERS_CONDITIONS_TODAY: &str = "Filters:conditions.today";
pub const FILTERS_CONDITIONS_TOMORROW: &str = "Filters:conditions.tomorrow";
pub const FILTERS_CONDITIONS_YESTERDAY: &str = "Filters:conditions.yesterday";

// ==================== Filters: Labels ====================

pub const FILTERS_LABELS_FILTER_BY_CONDITION: &str = "Filters:labels.filterByCondition";
pub const FILTERS_LABELS_FILTER_BY_VALUE: &str = "Filters:labels.filterByValue";
pub const FILTERS_LABELS_CONJUNCTION: &str = "Filters:labels.conjunction";
pub const FILTERS_LABELS_DISJUNCTION: &str = "Filters:labels.disjunction";

// ==================== Filters: Buttons ====================

pub const FILTERS_BUTTONS_SELECT_ALL: &str = "Filters:buttons.selectAll";
pub const FILTERS_BUTTONS_CLEAR: &str = "Filters:buttons.clear";
pub const FILTERS_BUTTONS_OK: &str = "Filters:buttons.ok";
pub const FILTERS_BUTTONS_CANCEL: &str = "Filters:buttons.cancel";

pub const FILTERS_BUTTONS_PLACEHOLDER_SEARCH: &str = "Filters:buttons.placeholder.search";
pub const FILTERS_BUTTONS_PLACEHOLDER_VALUE: &str = "Filters:buttons.placeholder.value";
pub const FILTERS_BUTTONS_PLACEHOLDER_SECOND_VALUE: &str =
    "Filters:buttons.placeholder.secondValue";
