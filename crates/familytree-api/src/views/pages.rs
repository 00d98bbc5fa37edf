//! Home and tree browsing pages.

use super::layout;

/// The home page.
pub fn index() -> String {
    let body = r#"<p>Record your family, attach photos, and browse the tree.</p>
<ul>
<li><a href="/view">Browse the tree</a></li>
<li><a href="/add">Add a family member</a></li>
<li><a href="/edit">Edit a family member</a></li>
<li><a href="/display">List all members</a></li>
</ul>"#;
    layout("Family Tree", body)
}

/// The tree page. Members are loaded from `/api/members` in the browser and
/// nested under their parents; members whose parent is missing are shown as
/// roots.
pub fn tree() -> String {
    let body = r#"<div id="tree"><p>Loading...</p></div>
<script>
(function () {
  function text(value) { return document.createTextNode(value == null ? "" : String(value)); }
  function name(m) {
    return [m.first_name, m.middle_name, m.last_name, m.suffix].filter(Boolean).join(" ");
  }
  function render(members) {
    var byParent = {};
    var ids = {};
    members.forEach(function (m) { ids[m.id] = true; });
    members.forEach(function (m) {
      var key = m.parent_id != null && ids[m.parent_id] ? m.parent_id : "root";
      (byParent[key] = byParent[key] || []).push(m);
    });
    var seen = {};
    function branch(key) {
      var ul = document.createElement("ul");
      (byParent[key] || []).forEach(function (m) {
        if (seen[m.id]) { return; }
        seen[m.id] = true;
        var li = document.createElement("li");
        li.className = "member";
        var strong = document.createElement("strong");
        strong.appendChild(text(name(m)));
        li.appendChild(strong);
        if (m.birth_date) { li.appendChild(text(" (born " + m.birth_date + ")")); }
        if (m.spouse) { li.appendChild(text(", married to " + m.spouse)); }
        if (m.image_file) {
          var img = document.createElement("img");
          img.src = "/" + m.image_file;
          img.alt = name(m);
          li.appendChild(document.createElement("br"));
          li.appendChild(img);
        }
        li.appendChild(branch(m.id));
        ul.appendChild(li);
      });
      return ul;
    }
    var root = document.getElementById("tree");
    root.innerHTML = "";
    if (members.length === 0) { root.appendChild(text("No members yet.")); return; }
    root.appendChild(branch("root"));
  }
  fetch("/api/members")
    .then(function (r) { return r.json().then(function (body) { return { ok: r.ok, body: body }; }); })
    .then(function (res) {
      if (!res.ok) { throw new Error(res.body.error || "request failed"); }
      render(res.body);
    })
    .catch(function (err) {
      var root = document.getElementById("tree");
      root.innerHTML = "";
      root.appendChild(text("Could not load the tree: " + err.message));
    });
})();
</script>"#;
    layout("Family Tree View", body)
}
