pub(crate) mod charts;
pub(crate) mod expenses;
pub(crate) mod overview;
pub(crate) mod report;
