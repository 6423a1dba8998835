//! English - United States phrase table (the default dictionary).

use super::keys::*;
use super::StaticPhrase::{self, Plural, Text};

/// Language code of the default dictionary.
pub const LANGUAGE_CODE: &str = "en-US";

pub const PHRASES: &[(&str, StaticPhrase)] = &[
    (CONTEXTMENU_ITEMS_ROW_ABOVE, Text("Insert row above")),
    (CONTEXTMENU_ITEMS_ROW_BELOW, Text("Insert row below")),
    (CONTEXTMENU_ITEMS_INSERT_LEFT, Text("Insert column left")),
    (CONTEXTMENU_ITEMS_INSERT_RIGHT, Text("Insert column right")),
    (CONTEXTMENU_ITEMS_REMOVE_ROW, Plural("Remove row", "Remove rows")),
    (CONTEXTMENU_ITEMS_REMOVE_COLUMN, Plural("Remove column", "Remove columns")),
    (CONTEXTMENU_ITEMS_UNDO, Text("Undo")),
    (CONTEXTMENU_ITEMS_REDO, Text("Redo")),
    (CONTEXTMENU_ITEMS_READ_ONLY, Text("Read only")),
    (CONTEXTMENU_ITEMS_CLEAR_COLUMN, Text("Clear column")),
    (CONTEXTMENU_ITEMS_ALIGNMENT, Text("Alignment")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_LEFT, Text("Left")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_CENTER, Text("Center")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_RIGHT, Text("Right")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_JUSTIFY, Text("Justify")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_TOP, Text("Top")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_MIDDLE, Text("Middle")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_BOTTOM, Text("Bottom")),
    (CONTEXTMENU_ITEMS_COPY, Text("Copy")),
    (CONTEXTMENU_ITEMS_CUT, Text("Cut")),
    (FILTERS_CONDITIONS_NONE, Text("None")),
    (FILTERS_CONDITIONS_EMPTY, Text("Is empty")),
    (FILTERS_CONDITIONS_NOT_EMPTY, Text("Is not empty")),
    (FILTERS_CONDITIONS_EQUAL, Text("Is equal to")),
    (FILTERS_CONDITIONS_NOT_EQUAL, Text("Is not equal to")),
    (FILTERS_CONDITIONS_BEGINS_WITH, Text("Begins with")),
    (FILTERS_CONDITIONS_ENDS_WITH, Text("Ends with")),
    (FILTERS_CONDITIONS_CONTAINS, Text("Contains")),
    (FILTERS_CONDITIONS_NOT_CONTAIN, Text("Does not contain")),
    (FILTERS_CONDITIONS_BY_VALUE, Text("By value")),
    (FILTERS_CONDITIONS_GREATER_THAN, Text("Greater than")),
    (FILTERS_CONDITIONS_GREATER_THAN_OR_EQUAL, Text("Greater than or equal to")),
    (FILTERS_CONDITIONS_LESS_THAN, Text("Less than")),
    (FILTERS_CONDITIONS_LESS_THAN_OR_EQUAL, Text("Less than or equal to")),
    (FILTERS_CONDITIONS_BETWEEN, Text("Is between")),
    (FILTERS_CONDITIONS_NOT_BETWEEN, Text("Is not between")),
    (FILTERS_CONDITIONS_AFTER, Text("After")),
    (FILTERS_CONDITIONS_BEFORE, Text("Before")),
    (FILTERS_CONDITIONS_TODAY, Text("Today")),
    (FILTERS_CONDITIONS_TOMORROW, Text("Tomorrow")),
    (FILTERS_CONDITIONS_YESTERDAY, Text("Yesterday")),
    (FILTERS_LABELS_FILTER_BY_CONDITION, Text("Filter by condition")),
    (FILTERS_LABELS_FILTER_BY_VALUE, Text("Filter by value")),
    (FILTERS_LABELS_CONJUNCTION, Text("And")),
    (FILTERS_LABELS_DISJUNCTION, Text("Or")),
    (FILTERS_BUTTONS_SELECT_ALL, Text("Select all")),
    (FILTERS_BUTTONS_CLEAR, Text("Clear")),
    (FILTERS_BUTTONS_OK, Text("OK")),
    (FILTERS_BUTTONS_CANCEL, Text("Cancel")),
    (FILTERS_BUTTONS_PLACEHOLDER_SEARCH, Text("Search")),
    (FILTERS_BUTTONS_PLACEHOLDER_VALUE, Text("Value")),
    (FILTERS_BUTTONS_PLACEHOLDER_SECOND_VALUE, Text("Second value")),
];
