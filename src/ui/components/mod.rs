pub mod basis_badge;
pub mod fee_table;
pub mod kpi_card;
pub mod notice;
