//! Lists the policy directory.

use anyhow::Result;
use serde_json::json;
use warden::PolicyEvaluator;
use warden::config::PolicyConfig;

use crate::style::{print_hint, styled_table};

pub fn run(evaluator: &PolicyEvaluator, json: bool) -> Result<()> {
    let config = evaluator.config();

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(config))?);
        return Ok(());
    }

    let table = styled_table(
        &["User", "Role", "Clearance", "Device", "Files"],
        &rows(config),
    );
    println!("{table}");
    println!();
    print_hint(&format!(
        "ABAC grants only between {:02}:00 and {:02}:00",
        config.window.start_hour(),
        config.window.end_hour()
    ));

    Ok(())
}

fn rows(config: &PolicyConfig) -> Vec<Vec<String>> {
    config
        .directory
        .users()
        .map(|(user, record)| {
            let files = config
                .permissions
                .files_for(user)
                .map(|files| {
                    files
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_else(|| "-".to_string());
            vec![
                user.to_string(),
                record.role.to_string(),
                record.clearance.to_string(),
                record.device.to_string(),
                files,
            ]
        })
        .collect()
}

fn to_json(config: &PolicyConfig) -> serde_json::Value {
    let users: Vec<_> = config
        .directory
        .users()
        .map(|(user, record)| {
            json!({
                "user": user,
                "role": record.role,
                "clearance": record.clearance,
                "device": record.device,
                "files": config.permissions.files_for(user),
            })
        })
        .collect();

    json!({
        "users": users,
        "window": config.window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_seed_directory() {
        let config = PolicyConfig::builtin();
        let rows = rows(&config);

        assert_eq!(rows.len(), 4);
        let keng = rows.iter().find(|row| row[0] == "keng").unwrap();
        assert_eq!(keng[1], "nurse");
        assert_eq!(keng[4], "file1");
    }

    #[test]
    fn test_json_shape() {
        let value = to_json(&PolicyConfig::builtin());

        assert_eq!(value["users"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["window"]["start_hour"], 9);
        assert_eq!(value["window"]["end_hour"], 17);
    }
}
