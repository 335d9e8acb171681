//! Vacancy Board Common Library
//!
//! 求人一覧画面のドメイン型と、ブラウザに依存しないクライアント側ロジック

pub mod api;
pub mod config;
pub mod datetime;
pub mod debounce;
pub mod draft;
pub mod error;
pub mod filter;
pub mod panel;
pub mod sequence;
pub mod types;
pub mod validation;

pub use api::{
    check_status, parse_list_response, ApiRequest, Endpoint, ListPage, Method, Mutation,
};
pub use config::AppConfig;
pub use debounce::{Debouncer, Scheduler, DEBOUNCE_MS};
pub use draft::{ShiftDraft, ShiftField, VacancyDraft};
pub use error::{Error, Result};
pub use filter::{filter_vacancies, PriceRange, PRICE_CEILING, PRICE_FLOOR};
pub use panel::EditPanel;
pub use sequence::{RequestSequencer, Ticket};
pub use types::{ShiftType, Vacancy, VacancyId, VacancyPayload, WireShift};
pub use validation::ValidationErrors;
