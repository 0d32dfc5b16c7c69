pub mod sqlformat_engine;
