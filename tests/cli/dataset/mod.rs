mod reports_dataset_state_contract;
