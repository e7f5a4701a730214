pub mod audience_selector;
pub mod campaign_info;
pub mod care_gaps;
pub mod review;
pub mod stepper;
