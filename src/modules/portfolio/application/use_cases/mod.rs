pub mod get_portfolio;
