use maud::{html, Markup, PreEscaped, DOCTYPE};

// Styles for the report fragments. The pages are rendered server side,
// so everything a fragment needs ships with the layout.
const REPORT_CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 0; border-bottom: 1px solid #e5e7eb; }
.result-card { margin-top: 1.5rem; padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 12px; }
.result-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; margin-bottom: 1.5rem; }
.vehicle-info { color: #6b7280; margin-top: 0.5rem; font-weight: 500; }
.vehicle-color { text-transform: capitalize; }
.result-badge { padding: 0.25rem 0.75rem; border-radius: 999px; font-weight: 600; }
.success { color: #15803d; }
.warning { color: #a16207; }
.danger { color: #b91c1c; }
.info-grid, .finance-grid, .scores-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; margin-top: 1rem; }
.info-item, .finance-item { padding: 1rem; border: 1px solid #e5e7eb; border-radius: 8px; }
.info-label, .finance-label { display: block; font-size: 0.875rem; color: #6b7280; margin-bottom: 0.5rem; }
.info-value, .finance-value { display: block; font-size: 1.125rem; font-weight: 700; }
.rfr-list, .factors-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.rfr-list li { padding: 0.75rem; border-left: 3px solid #6366f1; border-radius: 6px; background: #f9fafb; }
.rfr-list.failures li { border-left-color: #ef4444; }
.rfr-list li.dangerous { background: #fee2e2; border-left-color: #dc2626; }
.timeline-item { display: flex; gap: 1rem; margin-bottom: 1rem; padding-bottom: 1rem; border-bottom: 1px solid #e5e7eb; }
.timeline-marker { width: 12px; height: 12px; border-radius: 50%; margin-top: 5px; flex-shrink: 0; }
.timeline-marker.pass { background: #22c55e; }
.timeline-marker.fail { background: #ef4444; }
.timeline-marker.dangerous { box-shadow: 0 0 0 3px #fecaca; }
.timeline-content { flex: 1; }
.timeline-header { display: flex; justify-content: space-between; cursor: pointer; }
.timeline-result.pass { color: #22c55e; }
.timeline-result.fail { color: #ef4444; }
.score-circle { position: relative; width: 200px; height: 200px; margin: 0 auto 1.5rem; }
.score-value { position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); text-align: center; }
.score-number { display: block; font-size: 2.5rem; font-weight: 800; }
.score-item { display: flex; align-items: center; gap: 0.75rem; }
.score-bar { flex: 1; height: 8px; background: #e5e7eb; border-radius: 999px; overflow: hidden; }
.score-fill { height: 100%; background: linear-gradient(90deg, #db01f9, #0071f8); }
.error-card { text-align: center; padding: 2rem; background: #fee2e2; border: 1px solid #fca5a5; border-radius: 12px; }
.disclaimer-box { margin-top: 1.5rem; padding: 1rem; background: #fef9c3; border: 1px solid #fde047; border-radius: 8px; font-size: 0.875rem; }
.no-issues { padding: 1.5rem; margin-top: 1.5rem; text-align: center; background: #dcfce7; border-radius: 8px; color: #15803d; font-weight: 600; }
textarea { width: 100%; min-height: 10rem; font-family: ui-monospace, monospace; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(REPORT_CSS)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 17a2 2 0 1 0 4 0a2 2 0 1 0 -4 0" {}
                        path d="M15 17a2 2 0 1 0 4 0a2 2 0 1 0 -4 0" {}
                        path d="M5 17h-2v-6l2 -5h9l4 5h1a2 2 0 0 1 2 2v4h-2m-4 0h-6m-6 -6h15m-6 0v-5" {}
                    }
                    h3 { "MOT Report" }
                    nav {
                        a href="/" { "Home" }
                    }
                }
                (content)
            }
        }
    }
}
