use crate::cli::api_client::ApiClient;
use crate::cli::commands::PageParams;
use crate::cli::commands::student::{Student, format_student_table};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Serialize, Deserialize)]
struct ListMentorsResponse {
    items: Vec<Mentor>,
    total: usize,
    limit: usize,
    offset: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateMentorRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Tabled)]
struct MentorDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Mentor> for MentorDisplay {
    fn from(mentor: &Mentor) -> Self {
        Self {
            id: mentor.id.clone(),
            name: truncate_with_ellipsis(&mentor.name, 40),
            email: truncate_with_ellipsis(&mentor.email, 40),
        }
    }
}

/// Create a mentor
pub async fn create_mentor(
    api_client: &ApiClient,
    request: CreateMentorRequest,
    format: &str,
) -> CliResult<String> {
    let response = api_client.post("/api/mentors").json(&request).send().await?;
    let mentor: Mentor = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&mentor)?),
        _ => Ok(format!("Created mentor: {} ({})", mentor.id, mentor.name)),
    }
}

/// List mentors
pub async fn list_mentors(
    api_client: &ApiClient,
    page: PageParams<'_>,
    format: &str,
) -> CliResult<String> {
    let request = page.apply(api_client.get("/api/mentors"));
    let response: ListMentorsResponse =
        ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response.items)?),
        _ => Ok(format_mentor_table(&response.items)),
    }
}

pub(crate) fn format_mentor_table(mentors: &[Mentor]) -> String {
    if mentors.is_empty() {
        return "No mentors found.".to_string();
    }

    let display: Vec<MentorDisplay> = mentors.iter().map(|m| m.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single mentor by ID
pub async fn get_mentor(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let response = api_client
        .get(&format!("/api/mentors/{}", id))
        .send()
        .await?;
    let mentor: Mentor = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&mentor)?),
        _ => Ok(format_mentor_table(std::slice::from_ref(&mentor))),
    }
}

/// List the students assigned to a mentor
pub async fn list_mentor_students(
    api_client: &ApiClient,
    id: &str,
    format: &str,
) -> CliResult<String> {
    let response = api_client
        .get(&format!("/api/mentors/{}/students", id))
        .send()
        .await?;
    let students: Vec<Student> = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&students)?),
        _ => Ok(format_student_table(&students)),
    }
}
