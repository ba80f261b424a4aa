use dioxus::prelude::{Key, *};

use crate::state::column::CellType;
use crate::state::expansion::CellRef;
use crate::state::i18n;
use crate::state::locale::{ContainerAttributes, Locale};
use crate::state::table_state::{DrawnCell, DrawnRow, HeaderCell, SortOrder, TableHandle};

/// Writes to the loaded table, if any.
fn update_table(table: Signal<Option<TableHandle>>, update: impl FnOnce(&mut TableHandle)) {
    let mut table = table;
    table.with_mut(|table| {
        if let Some(handle) = table.as_mut() {
            update(handle);
        }
    });
}

#[component]
pub fn DataTable(table: Signal<Option<TableHandle>>, container: Signal<ContainerAttributes>) -> Element {
    let attributes = container.read().clone();
    let guard = table.read();
    let Some(snapshot) = guard.as_ref() else {
        return rsx! {};
    };
    let locale = snapshot.resolve_locale(&attributes);
    let header = snapshot.header();
    let headers = header.clone();
    let drawn = snapshot.draw(locale);
    let search_query = snapshot.search_query().to_string();
    let csv_path = snapshot.csv_path().map(str::to_string);
    drop(guard);

    let visible_columns = header.iter().filter(|cell| cell.visible).count();
    let search_placeholder = i18n::tr(locale, "table.search_placeholder");
    let csv_label = i18n::tr(locale, "table.download_csv");
    let empty_label = i18n::tr(locale, "table.empty");

    rsx! {
        div {
            class: "table-container",
            id: "data_table",
            "language": attributes.language.clone(),
            div { class: "table-controls",
                input {
                    class: "table-search",
                    id: "input-search-query",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{search_query}",
                    oninput: move |evt| {
                        let query = evt.value();
                        update_table(table, |state| state.set_search(query));
                    }
                }
                if let Some(csv) = csv_path {
                    a { class: "csv-download", href: "{csv}", download: "", "{csv_label}" }
                }
            }
            table {
                thead {
                    tr {
                        for cell in header.into_iter().filter(|cell| cell.visible) {
                            HeaderColumn { cell, table, locale }
                        }
                    }
                }
                tbody {
                    if drawn.rows.is_empty() {
                        tr {
                            td { class: "dataTables_empty", colspan: "{visible_columns}", "{empty_label}" }
                        }
                    }
                    for row in drawn.rows.iter().cloned() {
                        BodyRow {
                            key: "{row.data_index}",
                            row,
                            anchor: drawn.anchor,
                            headers: headers.clone(),
                            table,
                            locale,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderColumn(cell: HeaderCell, table: Signal<Option<TableHandle>>, locale: Locale) -> Element {
    let title = cell.title_key.map(|key| i18n::tr(locale, key)).unwrap_or_default();
    let index = cell.index;
    let class = match cell.sort {
        Some(SortOrder::Asc) => "sorting_asc",
        Some(SortOrder::Desc) => "sorting_desc",
        None if cell.orderable => "sorting",
        None => "sorting_disabled",
    };
    let aria_sort = cell.sort.as_ref().map(|order| match order {
        SortOrder::Asc => "ascending",
        SortOrder::Desc => "descending",
    });

    rsx! {
        th {
            class: "{class}",
            "scope": "col",
            "aria-sort": aria_sort,
            style: cell.width.as_ref().map(|width| format!("width: {width};")),
            onclick: move |_| {
                update_table(table, |state| {
                    state.sort_by_column_toggle(index);
                });
            },
            "{title}"
        }
    }
}

#[component]
fn BodyRow(
    row: DrawnRow,
    anchor: usize,
    headers: Vec<HeaderCell>,
    table: Signal<Option<TableHandle>>,
    locale: Locale,
) -> Element {
    let data_index = row.data_index;
    let visible_count = row.cells.iter().filter(|cell| cell.visible).count();
    let details: Vec<(String, String)> = row
        .cells
        .iter()
        .zip(headers.iter())
        .enumerate()
        .filter(|(column, (cell, _))| cell.visible && *column != anchor)
        .map(|(_, (cell, header))| {
            (
                header
                    .title_key
                    .map(|key| i18n::tr(locale, key))
                    .unwrap_or_default()
                    .to_string(),
                cell.markup.as_str().to_string(),
            )
        })
        .collect();

    let row_class = if row.expanded { "parent" } else { "" };

    rsx! {
        tr { class: "{row_class}",
            for (column, cell) in row.cells.iter().cloned().enumerate().filter(|(_, cell)| cell.visible) {
                BodyCell {
                    cell,
                    cell_ref: CellRef::new(data_index, column),
                    is_anchor: column == anchor,
                    table,
                }
            }
        }
        if row.expanded {
            tr { class: "child",
                td { colspan: "{visible_count}",
                    ul { class: "dtr-details",
                        for (title, markup) in details {
                            li {
                                span { class: "dtr-title", "{title}" }
                                span { class: "dtr-data", dangerous_inner_html: "{markup}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BodyCell(
    cell: DrawnCell,
    cell_ref: CellRef,
    is_anchor: bool,
    table: Signal<Option<TableHandle>>,
) -> Element {
    let attrs = cell.attributes;
    let class = attrs.class_attr();
    let markup = cell.markup.into_string();
    let aria_expanded = attrs.aria_expanded.map(|expanded| expanded.to_string());
    let tabindex = attrs.tabindex.map(|index| index.to_string());

    let activate = move || {
        update_table(table, |state| {
            state.activate_cell(cell_ref);
        });
    };
    let onkeydown = move |evt: KeyboardEvent| {
        if !is_anchor {
            return;
        }
        let pressed = match evt.key() {
            Key::Enter => true,
            Key::Character(ch) => ch == " ",
            _ => false,
        };
        if pressed {
            evt.prevent_default();
            activate();
        }
    };

    match cell.tag {
        CellType::Th => rsx! {
            th {
                class: "{class}",
                "scope": attrs.scope,
                "role": attrs.role,
                tabindex: tabindex,
                "aria-expanded": aria_expanded,
                onclick: move |_| activate(),
                onkeydown,
                dangerous_inner_html: "{markup}",
            }
        },
        CellType::Td => rsx! {
            td {
                class: "{class}",
                "scope": attrs.scope,
                "role": attrs.role,
                tabindex: tabindex,
                "aria-expanded": aria_expanded,
                onclick: move |_| activate(),
                onkeydown,
                dangerous_inner_html: "{markup}",
            }
        },
    }
}
