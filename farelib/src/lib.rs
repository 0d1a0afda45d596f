//! farelib — библиотека расчёта тарифов Кералы (авторикша, автобус, такси)

pub mod error;
pub mod model;
pub mod traits;

pub mod modes {
    pub mod auto;
    pub mod bus;
    pub mod taxi;
}

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod text;
}
