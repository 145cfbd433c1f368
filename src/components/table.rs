//! Facility table.
//!
//! Shows the same visible set as the map. Header clicks only change display
//! order; the visible set itself is never re-sorted.

use std::cmp::Ordering;

use ceamap_core::{FacilityRecord, MISSING_FIELD};
use ceamap_core::markup::{WebLink, web_link};
use ceamap_core::record::or_missing;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::icons as ic;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/table.module.css");

// ============================================================================
// Columns and sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    FacilityType,
    Crops,
    Contact,
    Email,
    Address,
    Website,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::FacilityType,
        Column::Crops,
        Column::Contact,
        Column::Email,
        Column::Address,
        Column::Website,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::FacilityType => "Facility Type",
            Self::Crops => "Crops",
            Self::Contact => "Contact",
            Self::Email => "E-mail",
            Self::Address => "Address",
            Self::Website => "Website",
        }
    }

    /// Case-folded cell text used for ordering.
    fn sort_key(self, record: &FacilityRecord) -> String {
        let text = match self {
            Self::Name => record.name.clone(),
            Self::FacilityType => record.types_display(),
            Self::Crops => record.crops_display(),
            Self::Contact => or_missing(&record.contact).to_string(),
            Self::Email => or_missing(&record.email).to_string(),
            Self::Address => or_missing(&record.address).to_string(),
            Self::Website => or_missing(&record.website).to_string(),
        };
        text.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Column and direction, or `None` for visible-set order.
pub type SortState = Option<(Column, SortOrder)>;

/// Header click: ascending, then descending, then back to unsorted.
/// Clicking a different column starts over at ascending.
pub fn next_sort(current: SortState, clicked: Column) -> SortState {
    match current {
        Some((column, SortOrder::Ascending)) if column == clicked => {
            Some((clicked, SortOrder::Descending))
        }
        Some((column, SortOrder::Descending)) if column == clicked => None,
        _ => Some((clicked, SortOrder::Ascending)),
    }
}

/// Order rows for display. Ties keep their visible-set order.
pub fn sort_rows<'a>(rows: &mut Vec<&'a FacilityRecord>, sort: SortState) {
    let Some((column, order)) = sort else {
        return;
    };
    let mut keyed: Vec<(String, &'a FacilityRecord)> =
        rows.drain(..).map(|r| (column.sort_key(r), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering: Ordering = a.cmp(b);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows.extend(keyed.into_iter().map(|(_, r)| r));
}

// ============================================================================
// Components
// ============================================================================

/// Visible facilities with a result count and sortable headers.
#[component]
pub fn FacilityTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let sort = RwSignal::new(None::<(Column, SortOrder)>);

    let count = move || {
        let n = ctx.rows.with(|rows| rows.len());
        match n {
            1 => "1 facility".to_string(),
            n => format!("{n} facilities"),
        }
    };

    let headers = Column::ALL
        .into_iter()
        .map(|column| {
            let indicator = move || match sort.get() {
                Some((c, SortOrder::Ascending)) if c == column => ic::SORT_ASC,
                Some((c, SortOrder::Descending)) if c == column => ic::SORT_DESC,
                _ => ic::SORT_NONE,
            };
            let aria_sort = move || match sort.get() {
                Some((c, SortOrder::Ascending)) if c == column => "ascending",
                Some((c, SortOrder::Descending)) if c == column => "descending",
                _ => "none",
            };
            view! {
                <th
                    class=css::header
                    aria-sort=aria_sort
                    on:click=move |_: ev::MouseEvent| sort.update(|s| *s = next_sort(*s, column))
                >
                    {column.title()}
                    <span class=css::sortIcon><Icon icon=Signal::derive(indicator) /></span>
                </th>
            }
        })
        .collect_view();

    let body = move || {
        let sort = sort.get();
        ctx.rows.with(|set| {
            let mut rows: Vec<&FacilityRecord> = set.iter().collect();
            sort_rows(&mut rows, sort);
            rows.into_iter().map(row_view).collect_view()
        })
    };

    view! {
        <section class=css::tableSection>
            <div class=css::count>{count}</div>
            <div class=css::scroll>
                <table class=css::table>
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </section>
    }
}

fn row_view(record: &FacilityRecord) -> impl IntoView + use<> {
    let email = match record.email.clone() {
        Some(email) => {
            let href = format!("mailto:{email}");
            view! { <a href=href>{email}</a> }.into_any()
        }
        None => MISSING_FIELD.into_any(),
    };

    let website = match record.website.clone() {
        Some(raw) => match web_link(&raw) {
            WebLink::Valid(url) => view! {
                <a href=url target="_blank" rel="noopener noreferrer" class=css::external>
                    {raw}
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            }
            .into_any(),
            WebLink::Invalid(_) => raw.into_any(),
        },
        None => MISSING_FIELD.into_any(),
    };

    view! {
        <tr>
            <td>{record.name.clone()}</td>
            <td>{record.types_display()}</td>
            <td>{record.crops_display()}</td>
            <td>{or_missing(&record.contact).to_string()}</td>
            <td>{email}</td>
            <td>{or_missing(&record.address).to_string()}</td>
            <td>{website}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ceamap_core::{FilterState, RecordStore, VisibleSet};

    use super::*;

    fn visible() -> VisibleSet {
        let store = RecordStore::from_json(
            r#"[
                {"Name of Facility": "beta farms", "Facility Type": "Greenhouse",
                 "Address": "2 Main St", "Latitude": 36.0, "Longitude": -120.0},
                {"Name of Facility": "Alpha Greens", "Facility Type": "Vertical Farming",
                 "Latitude": 37.0, "Longitude": -121.0},
                {"Name of Facility": "Gamma", "Facility Type": "Greenhouse",
                 "Address": "1 Main St", "Latitude": 38.0, "Longitude": -122.0}
            ]"#,
        )
        .unwrap();
        VisibleSet::compute(Rc::new(store), &FilterState::new())
    }

    fn names(rows: &[&FacilityRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_next_sort_cycles() {
        let s = next_sort(None, Column::Name);
        assert_eq!(s, Some((Column::Name, SortOrder::Ascending)));
        let s = next_sort(s, Column::Name);
        assert_eq!(s, Some((Column::Name, SortOrder::Descending)));
        assert_eq!(next_sort(s, Column::Name), None);
    }

    #[test]
    fn test_next_sort_other_column_restarts() {
        let s = Some((Column::Name, SortOrder::Descending));
        assert_eq!(
            next_sort(s, Column::Crops),
            Some((Column::Crops, SortOrder::Ascending))
        );
    }

    #[test]
    fn test_unsorted_keeps_visible_order() {
        let set = visible();
        let mut rows: Vec<_> = set.iter().collect();
        sort_rows(&mut rows, None);
        assert_eq!(names(&rows), ["beta farms", "Alpha Greens", "Gamma"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let set = visible();
        let mut rows: Vec<_> = set.iter().collect();
        sort_rows(&mut rows, Some((Column::Name, SortOrder::Ascending)));
        assert_eq!(names(&rows), ["Alpha Greens", "beta farms", "Gamma"]);

        sort_rows(&mut rows, Some((Column::Name, SortOrder::Descending)));
        assert_eq!(names(&rows), ["Gamma", "beta farms", "Alpha Greens"]);
    }

    #[test]
    fn test_sort_ties_are_stable() {
        let set = visible();
        let mut rows: Vec<_> = set.iter().collect();
        sort_rows(&mut rows, Some((Column::FacilityType, SortOrder::Ascending)));
        assert_eq!(names(&rows), ["beta farms", "Gamma", "Alpha Greens"]);
    }

    #[test]
    fn test_missing_address_sorts_as_fallback_text() {
        let set = visible();
        let mut rows: Vec<_> = set.iter().collect();
        sort_rows(&mut rows, Some((Column::Address, SortOrder::Ascending)));
        // "1 main st" < "2 main st" < "n/a"
        assert_eq!(names(&rows), ["Gamma", "beta farms", "Alpha Greens"]);
    }
}
