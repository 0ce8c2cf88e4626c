use crate::cli::api_client::ApiClient;
use crate::cli::commands::PageParams;
use crate::cli::commands::mentor::{Mentor, format_mentor_table};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_optional_id, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Serialize, Deserialize)]
struct ListStudentsResponse {
    items: Vec<Student>,
    total: usize,
    limit: usize,
    offset: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mentor_id: Option<String>,
}

#[derive(Tabled)]
struct StudentDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Mentor")]
    mentor_id: String,
}

impl From<&Student> for StudentDisplay {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: truncate_with_ellipsis(&student.name, 40),
            email: truncate_with_ellipsis(&student.email, 40),
            mentor_id: format_optional_id(student.mentor_id.as_deref()),
        }
    }
}

/// Create a student
pub async fn create_student(
    api_client: &ApiClient,
    request: CreateStudentRequest,
    format: &str,
) -> CliResult<String> {
    let response = api_client
        .post("/api/students")
        .json(&request)
        .send()
        .await?;
    let student: Student = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&student)?),
        _ => Ok(format!("Created student: {} ({})", student.id, student.name)),
    }
}

/// List students, optionally only those without a mentor
pub async fn list_students(
    api_client: &ApiClient,
    unassigned: bool,
    page: PageParams<'_>,
    format: &str,
) -> CliResult<String> {
    let mut request = page.apply(api_client.get("/api/students"));
    if unassigned {
        request = request.query(&[("unassigned", "true")]);
    }

    let response: ListStudentsResponse =
        ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response.items)?),
        _ => Ok(format_student_table(&response.items)),
    }
}

pub(crate) fn format_student_table(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let display: Vec<StudentDisplay> = students.iter().map(|s| s.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single student by ID
pub async fn get_student(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let response = api_client
        .get(&format!("/api/students/{}", id))
        .send()
        .await?;
    let student: Student = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&student)?),
        _ => Ok(format_student_table(std::slice::from_ref(&student))),
    }
}

/// Show a student's mentor
pub async fn get_student_mentor(
    api_client: &ApiClient,
    id: &str,
    format: &str,
) -> CliResult<String> {
    let response = api_client
        .get(&format!("/api/students/{}/mentor", id))
        .send()
        .await?;
    let mentor: Option<Mentor> = ApiClient::handle_response(response).await?;

    match (format, mentor) {
        ("json", mentor) => Ok(serde_json::to_string_pretty(&mentor)?),
        (_, Some(mentor)) => Ok(format_mentor_table(std::slice::from_ref(&mentor))),
        (_, None) => Ok(format!("Student {} has no mentor.", id)),
    }
}
