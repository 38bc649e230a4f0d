use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};
use url::Url;

use crate::config::Config;
use crate::errors::{CollectorError, CollectorResult};
use crate::sink::google::auth;
use crate::sink::traits::{ValueInput, Worksheet};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const NEW_SHEET_ROWS: i64 = 2000;

/// One tab of a Google spreadsheet, driven over the Sheets v4 REST API.
/// Opens the tab by title and creates it when missing.
pub struct GoogleWorksheet {
    client: Client,
    token: String,
    spreadsheet_id: String,
    sheet_title: String,
    sheet_id: i64,
}

impl GoogleWorksheet {
    /// Authenticate and resolve (or create) the configured tab.
    /// `columns` sizes the grid when the tab has to be created.
    pub fn open(config: &Config, columns: usize) -> CollectorResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        let token = auth::fetch_access_token(&client, &config.service_account_path)?;

        let mut worksheet = Self {
            client,
            token,
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_title: config.sheet_name.clone(),
            sheet_id: 0,
        };

        let metadata = worksheet.metadata()?;
        worksheet.sheet_id = match find_sheet(&metadata, &worksheet.sheet_title) {
            Some((sheet_id, _)) => sheet_id,
            None => worksheet.add_sheet(columns)?,
        };

        Ok(worksheet)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.token)
    }

    fn spreadsheet_url(&self, trailing: &str) -> String {
        let mut url = Url::parse(API_BASE).unwrap();
        url.path_segments_mut()
            .unwrap()
            .push(&format!("{}{}", self.spreadsheet_id, trailing));
        url.to_string()
    }

    fn values_url(&self, range: &str, trailing: &str) -> String {
        let mut url = Url::parse(API_BASE).unwrap();
        url.path_segments_mut()
            .unwrap()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{}{}", range, trailing));
        url.to_string()
    }

    fn quoted_range(&self, cells: &str) -> String {
        format!("'{}'!{}", self.sheet_title.replace('\'', "''"), cells)
    }

    fn metadata(&self) -> CollectorResult<Value> {
        let url = self.spreadsheet_url("");
        let response = self
            .authorize(self.client.get(&url))
            .query(&[("fields", "sheets.properties")])
            .send()?;
        read_json(response)
    }

    fn add_sheet(&self, columns: usize) -> CollectorResult<i64> {
        let reply = self.batch_update(json!([{
            "addSheet": {
                "properties": {
                    "title": self.sheet_title,
                    "gridProperties": {
                        "rowCount": NEW_SHEET_ROWS,
                        "columnCount": columns,
                    }
                }
            }
        }]))?;

        reply["replies"][0]["addSheet"]["properties"]["sheetId"]
            .as_i64()
            .ok_or_else(|| {
                CollectorError::SheetsApi("addSheet reply carried no sheetId".to_string())
            })
    }

    fn batch_update(&self, requests: Value) -> CollectorResult<Value> {
        let url = self.spreadsheet_url(":batchUpdate");
        let response = self
            .authorize(self.client.post(&url))
            .json(&json!({ "requests": requests }))
            .send()?;
        read_json(response)
    }

    fn get_values(&self, range: &str, query: &[(&str, &str)]) -> CollectorResult<Vec<Vec<String>>> {
        let url = self.values_url(range, "");
        let response = self
            .authorize(self.client.get(&url))
            .query(query)
            .send()?;
        let body = read_json(response)?;

        let rows = body["values"]
            .as_array()
            .map(|rows| {
                rows.iter()
                    .map(|row| {
                        row.as_array()
                            .map(|cells| cells.iter().map(cell_to_string).collect())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    /// Grid column count for this tab, from fresh metadata.
    fn grid_columns(&self) -> CollectorResult<i64> {
        let metadata = self.metadata()?;
        find_sheet(&metadata, &self.sheet_title)
            .map(|(_, columns)| columns)
            .ok_or_else(|| {
                CollectorError::SheetsApi(format!("sheet '{}' disappeared", self.sheet_title))
            })
    }
}

impl Worksheet for GoogleWorksheet {
    fn header_row(&self) -> CollectorResult<Vec<String>> {
        let rows = self.get_values(&self.quoted_range("1:1"), &[])?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    fn write_header(&self, headers: &[String]) -> CollectorResult<()> {
        let url = self.values_url(&self.quoted_range("1:1"), "");
        let response = self
            .authorize(self.client.put(&url))
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [headers] }))
            .send()?;
        read_json(response).map(|_| ())
    }

    fn column_body(&self, column: usize) -> CollectorResult<Vec<String>> {
        let letter = column_letter(column);
        let range = self.quoted_range(&format!("{}2:{}", letter, letter));
        // FORMULA render so hyperlink cells come back as their formula,
        // not the display label.
        let columns = self.get_values(
            &range,
            &[("majorDimension", "COLUMNS"), ("valueRenderOption", "FORMULA")],
        )?;
        Ok(columns.into_iter().next().unwrap_or_default())
    }

    fn append_rows(&self, rows: &[Vec<String>], input: ValueInput) -> CollectorResult<()> {
        let input_option = match input {
            ValueInput::Raw => "RAW",
            ValueInput::UserEntered => "USER_ENTERED",
        };
        let url = self.values_url(&self.quoted_range("A1"), ":append");
        let response = self
            .authorize(self.client.post(&url))
            .query(&[
                ("valueInputOption", input_option),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": rows }))
            .send()?;
        read_json(response).map(|_| ())
    }

    fn trim_columns(&self, keep: usize) -> CollectorResult<()> {
        let current = self.grid_columns()?;
        if current <= keep as i64 {
            return Ok(());
        }
        self.batch_update(json!([{
            "deleteDimension": {
                "range": {
                    "sheetId": self.sheet_id,
                    "dimension": "COLUMNS",
                    "startIndex": keep,
                    "endIndex": current,
                }
            }
        }]))
        .map(|_| ())
    }

    fn freeze_header(&self) -> CollectorResult<()> {
        self.batch_update(json!([{
            "updateSheetProperties": {
                "properties": {
                    "sheetId": self.sheet_id,
                    "gridProperties": { "frozenRowCount": 1 }
                },
                "fields": "gridProperties.frozenRowCount"
            }
        }]))
        .map(|_| ())
    }

    fn sort_body_by_column(&self, column: usize) -> CollectorResult<()> {
        self.batch_update(json!([{
            "sortRange": {
                "range": {
                    "sheetId": self.sheet_id,
                    "startRowIndex": 1,
                },
                "sortSpecs": [{
                    "dimensionIndex": column,
                    "sortOrder": "ASCENDING",
                }]
            }
        }]))
        .map(|_| ())
    }

    fn clear_background(&self, columns: usize) -> CollectorResult<()> {
        self.batch_update(json!([{
            "repeatCell": {
                "range": {
                    "sheetId": self.sheet_id,
                    "startColumnIndex": 0,
                    "endColumnIndex": columns,
                },
                "cell": {
                    "userEnteredFormat": {
                        "backgroundColor": { "red": 1, "green": 1, "blue": 1 }
                    }
                },
                "fields": "userEnteredFormat.backgroundColor"
            }
        }]))
        .map(|_| ())
    }
}

/// Locate a tab by title; returns (sheetId, grid column count).
fn find_sheet(metadata: &Value, title: &str) -> Option<(i64, i64)> {
    metadata["sheets"].as_array()?.iter().find_map(|sheet| {
        let properties = &sheet["properties"];
        if properties["title"].as_str() == Some(title) {
            Some((
                properties["sheetId"].as_i64()?,
                properties["gridProperties"]["columnCount"].as_i64().unwrap_or(0),
            ))
        } else {
            None
        }
    })
}

fn read_json(response: reqwest::blocking::Response) -> CollectorResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(CollectorError::SheetsApi(format!(
            "request failed with {}: {}",
            status, body
        )));
    }
    Ok(response.json()?)
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A1-notation letter for a 0-based column index. Schemas top out at
/// five columns, so a single letter is enough.
fn column_letter(column: usize) -> char {
    debug_assert!(column < 26);
    (b'A' + column as u8) as char
}
