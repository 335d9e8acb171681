//! UIコンポーネント

pub mod header;
pub mod price_filter;
pub mod vacancy_form;
pub mod vacancy_list;
