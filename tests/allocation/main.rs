mod company_fixtures;
mod helpers;
mod macros;
mod pool_loading;
