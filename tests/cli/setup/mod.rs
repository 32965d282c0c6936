mod rerun_is_idempotent_contract;
mod reports_failure_exit_code_contract;
