//! Polish - Poland phrase table.

use super::keys::*;
use super::StaticPhrase::{self, Plural, Text};

pub const LANGUAGE_CODE: &str = "pl-PL";

pub const PHRASES: &[(&str, StaticPhrase)] = &[
    (CONTEXTMENU_ITEMS_ROW_ABOVE, Text("Wstaw wiersz powyżej")),
    (CONTEXTMENU_ITEMS_ROW_BELOW, Text("Wstaw wiersz poniżej")),
    (CONTEXTMENU_ITEMS_INSERT_LEFT, Text("Wstaw kolumnę po lewej")),
    (CONTEXTMENU_ITEMS_INSERT_RIGHT, Text("Wstaw kolumnę po prawej")),
    (CONTEXTMENU_ITEMS_REMOVE_ROW, Plural("Usuń wiersz", "Usuń wiersze")),
    (CONTEXTMENU_ITEMS_REMOVE_COLUMN, Plural("Usuń kolumnę", "Usuń kolumny")),
    (CONTEXTMENU_ITEMS_UNDO, Text("Cofnij")),
    (CONTEXTMENU_ITEMS_REDO, Text("Przywróć")),
    (CONTEXTMENU_ITEMS_READ_ONLY, Text("Tylko do odczytu")),
    (CONTEXTMENU_ITEMS_ALIGNMENT, Text("Wyrównanie")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_LEFT, Text("Lewo")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_CENTER, Text("Środek")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_RIGHT, Text("Prawo")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_JUSTIFY, Text("Wyjustowane")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_TOP, Text("Góra")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_MIDDLE, Text("Środek")),
    (CONTEXTMENU_ITEMS_ALIGNMENT_BOTTOM, Text("Dół")),
    (CONTEXTMENU_ITEMS_CLEAR_COLUMN, Text("Wyczyść kolumnę")),
    (CONTEXTMENU_ITEMS_COPY, Text("Kopiuj")),
    (CONTEXTMENU_ITEMS_CUT, Text("Wytnij")),
    (FILTERS_CONDITIONS_NONE, Text("Brak")),
    (FILTERS_CONDITIONS_EMPTY, Text("Jest pusty")),
    (FILTERS_CONDITIONS_NOT_EMPTY, Text("Nie jest pusty")),
    (FILTERS_CONDITIONS_EQUAL, Text("Jest równy")),
    (FILTERS_CONDITIONS_NOT_EQUAL, Text("Nie jest równy")),
    (FILTERS_CONDITIONS_BEGINS_WITH, Text("Zaczyna się od")),
    (FILTERS_CONDITIONS_ENDS_WITH, Text("Kończy się na")),
    (FILTERS_CONDITIONS_CONTAINS, Text("Zawiera")),
    (FILTERS_CONDITIONS_NOT_CONTAIN, Text("Nie zawiera")),
    (FILTERS_CONDITIONS_BY_VALUE, Text("By value")),
    (FILTERS_CONDITIONS_GREATER_THAN, Text("Większe niż")),
    (FILTERS_CONDITIONS_GREATER_THAN_OR_EQUAL, Text("Większe lub równe")),
    (FILTERS_CONDITIONS_LESS_THAN, Text("Mniejsze niż")),
    (FILTERS_CONDITIONS_LESS_THAN_OR_EQUAL, Text("Mniejsze lub równe")),
    (FILTERS_CONDITIONS_BETWEEN, Text("Pomiędzy")),
    (FILTERS_CONDITIONS_NOT_BETWEEN, Text("Nie jest pomiędzy")),
    (FILTERS_CONDITIONS_AFTER, Text("Po")),
    (FILTERS_CONDITIONS_BEFORE, Text("Przed")),
    (FILTERS_CONDITIONS_TODAY, Text("Dzisiaj")),
    (FILTERS_CONDITIONS_TOMORROW, Text("Jutro")),
    (FILTERS_CONDITIONS_YESTERDAY, Text("Wczoraj")),
    (FILTERS_LABELS_FILTER_BY_CONDITION, Text("Filtruj na podstawie warunku")),
    (FILTERS_LABELS_FILTER_BY_VALUE, Text("Filtruj na podstawie wartości")),
    (FILTERS_LABELS_CONJUNCTION, Text("Oraz")),
    (FILTERS_LABELS_DISJUNCTION, Text("Lub")),
    (FILTERS_BUTTONS_SELECT_ALL, Text("Wybierz wszystkie")),
    (FILTERS_BUTTONS_CLEAR, Text("Wyczyść")),
    (FILTERS_BUTTONS_OK, Text("OK")),
    (FILTERS_BUTTONS_CANCEL, Text("Anuluj")),
    (FILTERS_BUTTONS_PLACEHOLDER_SEARCH, Text("Szukaj...")),
    (FILTERS_BUTTONS_PLACEHOLDER_VALUE, Text("Wartość")),
    (FILTERS_BUTTONS_PLACEHOLDER_SECOND_VALUE, Text("Druga wartość")),
];
