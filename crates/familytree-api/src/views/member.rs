//! Member forms and listings.

use std::fmt::Write as _;

use familytree_entity::member::{FamilyForest, FamilyMember};

use super::{escape, field, layout};

/// The add page: existing members followed by an empty form.
pub fn add_form(members: &[FamilyMember]) -> String {
    let mut body = String::new();
    body.push_str("<h2>Current members</h2>\n");
    body.push_str(&member_list(members));
    body.push_str("<h2>New member</h2>\n");
    body.push_str(r#"<form method="post" action="/add" enctype="multipart/form-data">"#);
    body.push('\n');
    body.push_str(&member_inputs(None, members));
    body.push_str(r#"<p><button type="submit">Add member</button></p>"#);
    body.push_str("\n</form>");
    layout("Add Family Member", &body)
}

/// The first edit phase: pick a member.
pub fn edit_selection(members: &[FamilyMember]) -> String {
    let mut body = String::new();
    if members.is_empty() {
        body.push_str(r#"<p>No members yet. <a href="/add">Add one</a>.</p>"#);
        return layout("Edit Family Member", &body);
    }

    body.push_str(r#"<form method="post" action="/edit">"#);
    body.push_str("\n<label>Member <select name=\"member_id\">\n");
    for m in members {
        let _ = writeln!(
            body,
            r#"<option value="{}">{}</option>"#,
            m.id,
            escape(&m.display_name())
        );
    }
    body.push_str("</select></label>\n");
    body.push_str(r#"<p><button type="submit">Edit</button></p>"#);
    body.push_str("\n</form>");
    layout("Edit Family Member", &body)
}

/// The second edit phase: the pre-filled form. Submitting it carries
/// `member_id_hidden`, which makes the POST a commit.
pub fn edit_form(member: &FamilyMember, members: &[FamilyMember]) -> String {
    let mut body = String::new();
    if let Some(image) = member.image_file.as_deref() {
        let _ = writeln!(
            body,
            r#"<p class="member"><img src="/{}" alt="{}"></p>"#,
            escape(image),
            escape(&member.display_name())
        );
    }
    body.push_str(r#"<form method="post" action="/edit" enctype="multipart/form-data">"#);
    let _ = writeln!(
        body,
        r#"
<input type="hidden" name="member_id_hidden" value="{}">"#,
        member.id
    );
    body.push_str(&member_inputs(Some(member), members));
    body.push_str(r#"<p><button type="submit">Save changes</button></p>"#);
    body.push_str("\n</form>");
    layout(&format!("Edit {}", member.display_name()), &body)
}

/// Every member with parent, children and lineage.
pub fn display(members: &[FamilyMember]) -> String {
    let forest = FamilyForest::new(members);
    let mut body = String::new();

    if forest.is_empty() {
        body.push_str("<p>No members yet.</p>");
        return layout("All Family Members", &body);
    }

    let _ = writeln!(
        body,
        "<p>{} member(s) in {} tree(s).</p>\n<ul>",
        forest.len(),
        forest.roots().len()
    );
    for m in members {
        let _ = write!(
            body,
            r#"<li class="member" id="member-{}"><strong>{}</strong>"#,
            m.id,
            escape(&m.display_name())
        );
        if let Some(born) = m.birth_date.as_deref() {
            let _ = write!(body, " (born {})", escape(born));
        }
        if let Some(spouse) = m.spouse.as_deref() {
            let _ = write!(body, ", married to {}", escape(spouse));
        }
        if let Some(date) = m.wedding_anniversary.as_deref() {
            let _ = write!(body, " on {}", escape(date));
        }
        if let Some(image) = m.image_file.as_deref() {
            let _ = write!(body, r#"<br><img src="/{}" alt="">"#, escape(image));
        }

        body.push_str("<br>Parent: ");
        match forest.parent_of(m) {
            Some(parent) => body.push_str(&link(parent)),
            None => body.push_str("none"),
        }

        let children = forest.children_of(m.id);
        if !children.is_empty() {
            let names: Vec<String> = children.iter().map(|c| link(c)).collect();
            let _ = write!(body, "<br>Children: {}", names.join(", "));
        }

        let lineage = forest.ancestors(m.id);
        if lineage.len() > 1 {
            let names: Vec<String> = lineage.iter().map(|a| escape(&a.first_name)).collect();
            let _ = write!(
                body,
                r#"<br><span class="lineage">Lineage: {}</span>"#,
                names.join(" &larr; ")
            );
        }

        if let Some(bio) = m.bio.as_deref() {
            let _ = write!(body, "<p>{}</p>", escape(bio));
        }
        if let Some(memories) = m.favorite_memories.as_deref() {
            let _ = write!(body, "<p><em>{}</em></p>", escape(memories));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>");
    layout("All Family Members", &body)
}

fn link(m: &FamilyMember) -> String {
    format!(
        "<a href=\"#member-{}\">{}</a>",
        m.id,
        escape(&m.display_name())
    )
}

fn member_list(members: &[FamilyMember]) -> String {
    if members.is_empty() {
        return "<p>No members yet.</p>\n".to_string();
    }
    let mut out = String::from("<ul>\n");
    for m in members {
        let _ = writeln!(out, "<li>{}</li>", escape(&m.display_name()));
    }
    out.push_str("</ul>\n");
    out
}

/// Inputs shared by the add and edit forms. The parent list leaves out the
/// member being edited.
fn member_inputs(current: Option<&FamilyMember>, members: &[FamilyMember]) -> String {
    let value = |get: fn(&FamilyMember) -> Option<&str>| field(current.and_then(get));
    let mut out = String::new();

    let text_inputs: [(&str, &str, bool, fn(&FamilyMember) -> Option<&str>); 7] = [
        ("first_name", "First name", true, |m| Some(m.first_name.as_str())),
        ("middle_name", "Middle name", false, |m| m.middle_name.as_deref()),
        ("last_name", "Last name", true, |m| Some(m.last_name.as_str())),
        ("suffix", "Suffix", false, |m| m.suffix.as_deref()),
        ("birth_date", "Birth date", false, |m| m.birth_date.as_deref()),
        ("spouse", "Spouse", false, |m| m.spouse.as_deref()),
        ("wedding_anniversary", "Wedding anniversary", false, |m| {
            m.wedding_anniversary.as_deref()
        }),
    ];

    for (name, label, required, get) in text_inputs {
        let _ = writeln!(
            out,
            r#"<label>{label} <input type="text" name="{name}" value="{}"{}></label>"#,
            value(get),
            if required { " required" } else { "" }
        );
    }

    let _ = writeln!(
        out,
        r#"<label>Bio <textarea name="bio">{}</textarea></label>"#,
        value(|m| m.bio.as_deref())
    );
    let _ = writeln!(
        out,
        r#"<label>Favorite memories <textarea name="favorite_memories">{}</textarea></label>"#,
        value(|m| m.favorite_memories.as_deref())
    );

    let selected_parent = current.and_then(|m| m.parent_id);
    out.push_str("<label>Parent <select name=\"parent_id\">\n<option value=\"\">(none)</option>\n");
    for m in members {
        if current.is_some_and(|c| c.id == m.id) {
            continue;
        }
        let _ = writeln!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            m.id,
            if selected_parent == Some(m.id) { " selected" } else { "" },
            escape(&m.display_name())
        );
    }
    out.push_str("</select></label>\n");
    out.push_str(
        "<label>Photo <input type=\"file\" name=\"image_file\" accept=\"image/*\"></label>\n",
    );
    out
}
