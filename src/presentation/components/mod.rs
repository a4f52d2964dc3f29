pub mod chart_canvas;
pub mod error_message;
pub mod portfolio;
pub mod portfolio_card;
pub mod query_input;
pub mod sol_price_history;
pub mod token_info;
pub mod token_lists;
pub mod token_sentiment;
pub mod trade_signals;

pub use chart_canvas::{BarChartCanvas, LineChartCanvas};
pub use error_message::ErrorMessage;
pub use portfolio::Portfolio;
pub use portfolio_card::PortfolioCard;
pub use query_input::{QueryInput, WalletInputForm};
pub use sol_price_history::{SolPriceHistory, watch_window};
pub use token_info::TokenInfoLookup;
pub use token_lists::{AllTokens, TopTokens};
pub use token_sentiment::TokenSentiment;
pub use trade_signals::TradeSignals;
