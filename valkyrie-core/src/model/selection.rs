use std::collections::BTreeSet;

use itertools::Itertools;

use super::{Area, DatasetCode, DateRange, Itrf};

/// the set of datasets chosen by the user. iteration always follows the
/// vocabulary order (ATM, GLAH06, ILVIS2), independent of insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetSelection(BTreeSet<DatasetCode>);

impl DatasetSelection {
    pub fn new(codes: impl IntoIterator<Item = DatasetCode>) -> Self {
        Self(codes.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetCode> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DatasetSelection {
    fn default() -> Self {
        Self::new([DatasetCode::Atm])
    }
}

impl std::fmt::Display for DatasetSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// user-selected state shared by the parameter builder and the clients.
/// `area` is None until a shape has been drawn (or supplied).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub area: Option<Area>,
    pub date_range: DateRange,
    pub datasets: DatasetSelection,
    pub itrf: Option<Itrf>,
}

impl Selection {
    pub fn new(
        area: Option<Area>,
        date_range: DateRange,
        datasets: DatasetSelection,
        itrf: Option<Itrf>,
    ) -> Self {
        Self {
            area,
            date_range,
            datasets,
            itrf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_and_dedup() {
        let selection = DatasetSelection::new([
            DatasetCode::Ilvis2,
            DatasetCode::Atm,
            DatasetCode::Ilvis2,
        ]);
        assert_eq!(
            selection.iter().copied().collect::<Vec<_>>(),
            vec![DatasetCode::Atm, DatasetCode::Ilvis2]
        );
        assert_eq!(selection.to_string(), "[ATM, ILVIS2]");
    }

    #[test]
    fn test_defaults() {
        let selection = Selection::default();
        assert!(selection.area.is_none());
        assert!(selection.itrf.is_none());
        assert_eq!(selection.datasets, DatasetSelection::new([DatasetCode::Atm]));
        assert_eq!(selection.date_range, DateRange::catalog_window());
    }
}
