mod case;
mod resultmatcher;
mod state;

pub use case::Case;
pub use case::Invocation;
pub use case::MutCase;
pub(crate) use case::generate_testcases;
pub use resultmatcher::ResultMatcher;
pub use state::State;
pub use state::StrState;
pub use state::tempfs;

/// A small export in the default column layout. Holds one ineligible row, one
/// transfer and one row with a malformed amount.
pub const DATA: &str = indoc::indoc!(
    "
    計算対象,日付,内容,金額（円）,期間,大項目,中項目,振替
    1,2024/01/25,Pay,1000,P1,Income,Salary,0
    1,2024/01/05,Noodles,-400,P1,Food,Lunch,0
    1,2024/01/07,Latte,-100,P1,Food,Coffee,0
    1,2024/01/09,Rent,-800,P1,Home,Rent,0
    1,2024/02/03,Tea,-50,P2,Food,Coffee,0
    0,2024/02/04,Ignored,-9999,P2,Food,Lunch,0
    1,2024/02/05,Move,-3000,P2,Transfer,Bank,1
    1,2024/02/06,Broken,abc,P2,Food,Lunch,0
    "
);
