use crate::server::{data::complaint::ComplaintRepository, model::complaint::CreateComplaintParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_submission;
mod set_resolved;

fn complaint_param(problem: &str) -> CreateComplaintParam {
    CreateComplaintParam {
        id: None,
        email: "jane@example.com".to_string(),
        problem: problem.to_string(),
        description: "Breakfast arrived cold".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}
