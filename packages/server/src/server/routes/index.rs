use axum::response::Html;

use kgraph::{vis_options, SUPPORTED_MODELS};

/// Serve the single-page UI.
///
/// The widget options and the model list are baked into the page at render
/// time so the in-app graph and the library stay in sync.
pub async fn index_page() -> Html<String> {
    let model_options: String = SUPPORTED_MODELS
        .iter()
        .map(|model| format!("<option value=\"{model}\">{model}</option>"))
        .collect();
    Html(
        INDEX_TEMPLATE
            .replace("{options_json}", &vis_options().to_string())
            .replace("{model_options}", &model_options),
    )
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>한국어 지식 그래프 생성기</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
    body {
        margin: 0;
        font-family: "Nanum Gothic", "Malgun Gothic", "Apple Gothic", sans-serif;
        color: #111827;
        background: #f9fafb;
    }
    .layout { display: flex; min-height: 100vh; }
    .sidebar {
        width: 280px;
        padding: 1.5rem;
        background: #ffffff;
        border-right: 1px solid #e5e7eb;
    }
    .sidebar h2 { margin-top: 0; }
    .sidebar label { display: block; margin: 0.8rem 0 0.2rem; font-weight: bold; }
    .sidebar input, .sidebar select {
        width: 100%;
        padding: 6px;
        box-sizing: border-box;
        border: 1px solid #d1d5db;
        border-radius: 4px;
    }
    .hint { color: #6B7280; font-size: 0.8rem; }
    main { flex: 1; padding: 1.5rem 2.5rem; max-width: 1100px; }
    .main-header {
        text-align: center;
        font-size: 2.5rem;
        color: #1E3A8A;
        margin-bottom: 0;
    }
    .sub-header {
        text-align: center;
        font-size: 1.2rem;
        color: #6B7280;
        margin-top: 0;
    }
    .entity-label {
        display: inline-block;
        padding: 4px 8px;
        border-radius: 4px;
        margin: 0 5px 5px 0;
        color: #ffffff;
        font-size: 0.85rem;
    }
    .footer {
        text-align: center;
        margin-top: 3rem;
        color: #6B7280;
        font-size: 0.8rem;
    }
    .tabs { margin: 1.5rem 0 1rem; border-bottom: 1px solid #e5e7eb; }
    .tab {
        background: none;
        border: none;
        padding: 0.6rem 1rem;
        font-size: 1rem;
        cursor: pointer;
        color: #6B7280;
        border-bottom: 2px solid transparent;
    }
    .tab.active { color: #1E3A8A; border-bottom-color: #1E3A8A; font-weight: bold; }
    .panel { display: none; }
    .panel.active { display: block; }
    textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.8rem;
        border: 1px solid #d1d5db;
        border-radius: 4px;
        font-family: inherit;
        font-size: 1rem;
    }
    .row { display: flex; gap: 0.6rem; margin: 0.8rem 0; }
    .row button {
        flex: 1;
        padding: 0.6rem;
        border: 1px solid #d1d5db;
        border-radius: 4px;
        background: #ffffff;
        cursor: pointer;
        font-size: 0.95rem;
    }
    .row button.primary { background: #1E3A8A; border-color: #1E3A8A; color: #ffffff; }
    .row button:disabled { opacity: 0.6; cursor: wait; }
    #status { margin: 0.6rem 0; padding: 0.6rem; border-radius: 4px; display: none; }
    #status.progress { display: block; background: #eff6ff; color: #1E3A8A; }
    #status.success { display: block; background: #ecfdf5; color: #065f46; }
    #status.error { display: block; background: #fef2f2; color: #991b1b; }
    #graph { width: 100%; height: 600px; border: 1px solid #e5e7eb; background: #ffffff; }
    #metrics { color: #6B7280; margin-bottom: 0.6rem; }
    #highlighted {
        padding: 1rem;
        background: #ffffff;
        border: 1px solid #e5e7eb;
        border-radius: 4px;
        line-height: 2;
    }
    table { width: 100%; border-collapse: collapse; background: #ffffff; margin-bottom: 1.5rem; }
    th, td { border: 1px solid #e5e7eb; padding: 6px 10px; text-align: left; font-size: 0.9rem; }
    th { background: #f3f4f6; }
    .export-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.6rem; max-width: 700px; }
    .export-grid button {
        padding: 0.7rem;
        border: 1px solid #d1d5db;
        border-radius: 4px;
        background: #ffffff;
        cursor: pointer;
    }
    .hidden { display: none; }
    .empty-note { color: #6B7280; padding: 1rem 0; }
</style>
</head>
<body>
<div class="layout">
<aside class="sidebar">
    <h2>⚙️ 설정</h2>
    <label for="api-key">Gemini API 키</label>
    <input type="password" id="api-key" placeholder="API 키 입력">
    <p class="hint">Google AI Studio에서 발급받은 API 키를 입력하세요.</p>

    <h3>모델 설정</h3>
    <label for="model">Gemini 모델</label>
    <select id="model">{model_options}</select>
    <label for="temperature">Temperature</label>
    <input type="number" id="temperature" min="0" max="1" step="0.1" value="0.2">
    <p class="hint">값이 낮을수록 일관된 결과, 높을수록 다양한 결과가 생성됩니다.</p>

    <h3>개체 유형</h3>
    <div>
        <span class="entity-label" style="background-color: #3498db">인물</span>
        <span class="entity-label" style="background-color: #2ecc71">조직</span>
        <span class="entity-label" style="background-color: #e74c3c">장소</span>
        <span class="entity-label" style="background-color: #f39c12">이벤트</span>
        <span class="entity-label" style="background-color: #9b59b6">제품</span>
        <span class="entity-label" style="background-color: #7f8c8d">기타</span>
    </div>

    <p class="footer">© 2025 한국어 지식 그래프 생성기</p>
</aside>
<main>
    <h1 class="main-header">한국어 지식 그래프 생성기</h1>
    <p class="sub-header">텍스트를 입력하면 개체(Entity)와 관계(Relation)를 추출하여 그래프로 시각화합니다.</p>

    <nav class="tabs">
        <button class="tab active" data-panel="input-panel">📝 텍스트 입력</button>
        <button class="tab" data-panel="data-panel">📊 데이터 보기</button>
        <button class="tab" data-panel="export-panel">📥 내보내기</button>
    </nav>

    <section id="input-panel" class="panel active">
        <textarea id="text" rows="12" placeholder="여기에 한국어 텍스트를 입력하세요..."></textarea>
        <div class="row">
            <button id="sample-btn">샘플 텍스트 불러오기</button>
            <button id="clear-btn">입력 지우기</button>
            <button id="analyze-btn" class="primary">분석하기</button>
        </div>
        <div id="status"></div>
        <div id="graph-section" class="hidden">
            <h2>지식 그래프 시각화</h2>
            <div id="metrics"></div>
            <div id="graph"></div>
        </div>
    </section>

    <section id="data-panel" class="panel">
        <p id="data-empty" class="empty-note">먼저 텍스트를 분석해주세요.</p>
        <div id="data-view" class="hidden">
            <h2>개체 하이라이트</h2>
            <div id="highlighted"></div>
            <h2>개체 (Entities)</h2>
            <table id="entities-table">
                <thead><tr><th>id</th><th>name</th><th>type</th><th>description</th></tr></thead>
                <tbody></tbody>
            </table>
            <h2>관계 (Relations)</h2>
            <table id="relations-table">
                <thead><tr><th>source</th><th>target</th><th>relation</th><th>sentence</th></tr></thead>
                <tbody></tbody>
            </table>
            <h2>관계 정보 (Relations with Info)</h2>
            <table id="relations-info-table">
                <thead><tr><th>source_id</th><th>source_name</th><th>source_type</th><th>target_id</th><th>target_name</th><th>target_type</th><th>relation</th><th>sentence</th></tr></thead>
                <tbody></tbody>
            </table>
        </div>
    </section>

    <section id="export-panel" class="panel">
        <p id="export-empty" class="empty-note">먼저 텍스트를 분석해주세요.</p>
        <div id="export-view" class="hidden">
            <h2>데이터 내보내기</h2>
            <div class="export-grid">
                <button data-format="entities.csv">개체 CSV 다운로드</button>
                <button data-format="relations.csv">관계 CSV 다운로드</button>
                <button data-format="relations_with_info.csv">관계정보 CSV 다운로드</button>
                <button data-format="json">JSON 파일 다운로드</button>
                <button data-format="jsonl">JSONL 파일 다운로드</button>
                <button data-format="html">HTML 그래프 다운로드</button>
            </div>
        </div>
    </section>
</main>
</div>
<script>
const OPTIONS = {options_json};
let lastResult = null;

const el = (id) => document.getElementById(id);

for (const tab of document.querySelectorAll(".tab")) {
    tab.addEventListener("click", () => {
        for (const other of document.querySelectorAll(".tab")) other.classList.remove("active");
        for (const panel of document.querySelectorAll(".panel")) panel.classList.remove("active");
        tab.classList.add("active");
        el(tab.dataset.panel).classList.add("active");
    });
}

el("sample-btn").addEventListener("click", async () => {
    const res = await fetch("/api/sample");
    const body = await res.json();
    el("text").value = body.text;
});

el("clear-btn").addEventListener("click", () => {
    el("text").value = "";
});

function setStatus(kind, message) {
    const status = el("status");
    status.className = kind;
    status.textContent = message;
}

el("analyze-btn").addEventListener("click", async () => {
    const text = el("text").value;
    if (!text.trim()) {
        setStatus("error", "텍스트를 입력해주세요.");
        return;
    }

    const payload = { text: text, model: el("model").value };
    const key = el("api-key").value.trim();
    if (key) payload.api_key = key;
    const temperature = parseFloat(el("temperature").value);
    if (!Number.isNaN(temperature)) payload.temperature = temperature;

    el("analyze-btn").disabled = true;
    setStatus("progress", "지식 그래프를 생성하는 중입니다...");
    try {
        const res = await fetch("/api/extract", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify(payload),
        });
        const body = await res.json();
        if (!res.ok) {
            setStatus("error", "추출 실패: " + (body.error || res.status));
            return;
        }
        render(body);
        setStatus("success", "지식 그래프 추출 성공! 개체 " + body.stats.entity_count
            + "개, 관계 " + body.stats.relation_count + "개를 찾았습니다.");
    } catch (err) {
        setStatus("error", "오류 발생: " + err.message);
    } finally {
        el("analyze-btn").disabled = false;
    }
});

function render(body) {
    lastResult = body.result;

    el("graph-section").classList.remove("hidden");
    el("metrics").textContent = "개체 " + body.stats.entity_count
        + "개 · 관계 " + body.stats.relation_count
        + "개 · 그래프 밀도 " + body.stats.density.toFixed(3);
    new vis.Network(el("graph"), {
        nodes: new vis.DataSet(body.graph.nodes),
        edges: new vis.DataSet(body.graph.edges),
    }, OPTIONS);

    el("data-empty").classList.add("hidden");
    el("data-view").classList.remove("hidden");
    el("highlighted").innerHTML = body.highlighted_text;
    fillTable("entities-table", body.result.entities.map(
        (e) => [e.id, e.name, e.type, e.description]));
    fillTable("relations-table", body.result.relations.map(
        (r) => [r.source, r.target, r.relation, r.sentence]));
    const byId = {};
    for (const e of body.result.entities) byId[e.id] = e;
    fillTable("relations-info-table", body.result.relations.map((r) => {
        const s = byId[r.source];
        const t = byId[r.target];
        return [r.source, s ? s.name : "", s ? s.type : "",
                r.target, t ? t.name : "", t ? t.type : "",
                r.relation, r.sentence];
    }));

    el("export-empty").classList.add("hidden");
    el("export-view").classList.remove("hidden");
}

function fillTable(id, rows) {
    const tbody = el(id).tBodies[0];
    tbody.innerHTML = "";
    for (const row of rows) {
        const tr = document.createElement("tr");
        for (const cell of row) {
            const td = document.createElement("td");
            td.textContent = cell == null ? "" : cell;
            tr.appendChild(td);
        }
        tbody.appendChild(tr);
    }
}

for (const button of document.querySelectorAll(".export-grid button")) {
    button.addEventListener("click", () => downloadExport(button.dataset.format));
}

async function downloadExport(format) {
    if (!lastResult) return;
    const res = await fetch("/api/export/" + format, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(lastResult),
    });
    if (!res.ok) {
        const body = await res.json();
        setStatus("error", "내보내기 실패: " + (body.error || res.status));
        return;
    }
    const disposition = res.headers.get("Content-Disposition") || "";
    const match = disposition.match(/filename="([^"]+)"/);
    const blob = await res.blob();
    const url = URL.createObjectURL(blob);
    const link = document.createElement("a");
    link.href = url;
    link.download = match ? match[1] : format;
    link.click();
    URL.revokeObjectURL(url);
}
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_renders_with_options_baked_in() {
        let Html(page) = index_page().await;
        assert!(page.contains("한국어 지식 그래프 생성기"));
        assert!(page.contains("vis-network.min.js"));
        assert!(page.contains("\"tooltipDelay\":300"));
        assert!(!page.contains("{options_json}"));
        assert!(!page.contains("{model_options}"));
        for model in SUPPORTED_MODELS {
            assert!(page.contains(model));
        }
    }

    #[test]
    fn test_template_lists_every_export_format() {
        for format in kgraph::ExportFormat::ALL {
            assert!(
                INDEX_TEMPLATE.contains(&format!("data-format=\"{}\"", format.tag())),
                "missing export button for {}",
                format.tag()
            );
        }
    }

    #[test]
    fn test_data_panel_shows_merged_relation_table() {
        assert!(INDEX_TEMPLATE.contains("관계 정보 (Relations with Info)"));
        assert!(INDEX_TEMPLATE.contains("relations-info-table"));
        for column in ["source_name", "source_type", "target_name", "target_type"] {
            assert!(
                INDEX_TEMPLATE.contains(&format!("<th>{column}</th>")),
                "missing joined column {column}"
            );
        }
    }
}
