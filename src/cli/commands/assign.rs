use crate::cli::api_client::ApiClient;
use crate::cli::commands::student::{Student, format_student_table};
use crate::cli::error::CliResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub mentor_id: String,
    pub student_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReassignRequest {
    mentor_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignResponse {
    pub mentor_id: String,
    pub modified_count: usize,
    pub students: Vec<Student>,
}

/// Assign unassigned students to a mentor
pub async fn assign(
    api_client: &ApiClient,
    request: AssignRequest,
    format: &str,
) -> CliResult<String> {
    let response = api_client.post("/api/assign").json(&request).send().await?;
    let result: AssignResponse = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&result)?),
        _ => Ok(format!(
            "Assigned {} student(s) to mentor {}\n{}",
            result.modified_count,
            result.mentor_id,
            format_student_table(&result.students)
        )),
    }
}

/// Point one student at a mentor, replacing any existing one
pub async fn reassign(
    api_client: &ApiClient,
    student_id: &str,
    mentor_id: &str,
    format: &str,
) -> CliResult<String> {
    let response = api_client
        .put(&format!("/api/assign/{}", student_id))
        .json(&ReassignRequest {
            mentor_id: mentor_id.to_string(),
        })
        .send()
        .await?;
    let student: Student = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&student)?),
        _ => Ok(format!(
            "Student {} now has mentor {}",
            student.id,
            student.mentor_id.as_deref().unwrap_or(mentor_id)
        )),
    }
}
