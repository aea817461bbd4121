mod payroll;

pub use payroll::{PayrollError, PayrollLoader, PayrollRecord, PayrollResult, PayrollTotals};
