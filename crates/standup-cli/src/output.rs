use standup_core::ticket::tickets_for;
use standup_core::{Person, Ticket};

/// Print the sprint's tickets as an aligned table with a trailing count.
pub fn print_ticket_table(tickets: &[Ticket]) {
    let rows: Vec<Vec<String>> = tickets
        .iter()
        .map(|t| {
            vec![
                t.key.clone(),
                t.status.clone(),
                t.priority.clone().unwrap_or_default(),
                t.assignee
                    .as_ref()
                    .map(|a| a.display_name.clone())
                    .unwrap_or_default(),
                truncate(&t.summary, 60),
            ]
        })
        .collect();
    render(&["KEY", "STATUS", "PRIORITY", "ASSIGNEE", "SUMMARY"], rows);
    println!("\n{} ticket(s)", tickets.len());
}

/// Print the speaker roster with how many sprint tickets each person holds.
pub fn print_people_table(people: &[Person], tickets: &[Ticket]) {
    let rows: Vec<Vec<String>> = people
        .iter()
        .map(|p| {
            vec![
                p.display_name.clone(),
                p.email.clone(),
                tickets_for(tickets, &p.id).len().to_string(),
            ]
        })
        .collect();
    render(&["NAME", "EMAIL", "TICKETS"], rows);
}

fn render(headers: &[&str], rows: Vec<Vec<String>>) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    // Print header
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    // Print separator
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    // Print rows
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

/// Cap a cell at `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
