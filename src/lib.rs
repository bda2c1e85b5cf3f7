//! 초경량 비행장치 개념 사이징 계산을 라이브러리로 분리하여 CLI 외의 프런트엔드에서도 재사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod requirements;
pub mod sizing;
pub mod ui_cli;
pub mod units;
