// ==========================================
// SpaceX 发射记录驾驶舱 - 页面外壳
// ==========================================
// 静态 HTML + 脚本: 拉取 /api/layout 绘制组件,
// 组件变化时 POST /api/update,按返回的 target 替换图表
// 选择状态仅存在于浏览器会话
// ==========================================

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.0.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 24px; }
  h1 { text-align: center; color: #503D36; font-size: 40px; }
  .slider { display: flex; gap: 12px; align-items: center; }
  .slider input[type=range] { flex: 1; }
  .marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1 id="heading"></h1>
<input id="site-search" type="search">
<select id="site-dropdown"></select>
<br>
<div id="success-pie-chart"></div>
<br>
<p id="payload-label"></p>
<div class="slider">
  <input id="payload-slider-low" type="range">
  <input id="payload-slider-high" type="range">
  <span id="payload-value"></span>
</div>
<div class="marks" id="payload-marks"></div>
<div id="success-payload-scatter-chart"></div>
<p class="error" id="error"></p>
<script>
const selection = { site: "ALL", payload_range: [0, 0] };

async function dispatch(trigger) {
  const resp = await fetch("/api/update", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ trigger, selection }),
  });
  const body = await resp.json();
  if (!resp.ok) {
    document.getElementById("error").textContent = body.message;
    return;
  }
  document.getElementById("error").textContent = "";
  for (const output of body.outputs) {
    Plotly.react(output.target, output.figure.data, output.figure.layout);
  }
}

function renderRange() {
  document.getElementById("payload-value").textContent =
    selection.payload_range[0] + " - " + selection.payload_range[1];
}

async function init() {
  const view = await (await fetch("/api/layout")).json();
  document.documentElement.lang = view.locale;
  document.getElementById("heading").textContent = view.heading;

  const dropdown = document.getElementById(view.dropdown.id);
  const search = document.getElementById("site-search");
  search.placeholder = view.dropdown.placeholder;
  search.hidden = !view.dropdown.searchable;
  const fillOptions = (filter) => {
    dropdown.innerHTML = "";
    for (const opt of view.dropdown.options) {
      if (filter && !opt.label.toLowerCase().includes(filter.toLowerCase())) continue;
      const el = document.createElement("option");
      el.value = opt.value;
      el.textContent = opt.label;
      el.selected = opt.value === selection.site;
      dropdown.appendChild(el);
    }
  };
  selection.site = view.dropdown.value;
  fillOptions("");
  search.addEventListener("input", () => {
    fillOptions(search.value);
    if (dropdown.options.length > 0 && dropdown.value !== selection.site) {
      selection.site = dropdown.value;
      dispatch({ widget: view.dropdown.id, event: "change" });
    }
  });
  dropdown.addEventListener("change", () => {
    selection.site = dropdown.value;
    dispatch({ widget: view.dropdown.id, event: "change" });
  });

  document.getElementById("payload-label").textContent = view.slider.label;
  const low = document.getElementById("payload-slider-low");
  const high = document.getElementById("payload-slider-high");
  for (const el of [low, high]) {
    el.min = view.slider.min;
    el.max = view.slider.max;
    el.step = view.slider.step;
  }
  selection.payload_range = view.slider.value.slice();
  low.value = selection.payload_range[0];
  high.value = selection.payload_range[1];
  const onSlide = () => {
    const a = Number(low.value), b = Number(high.value);
    selection.payload_range = [Math.min(a, b), Math.max(a, b)];
    renderRange();
    dispatch({ widget: view.slider.id, event: "change" });
  };
  low.addEventListener("change", onSlide);
  high.addEventListener("change", onSlide);
  const marks = document.getElementById("payload-marks");
  for (const mark of view.slider.marks) {
    const span = document.createElement("span");
    span.textContent = mark.label;
    marks.appendChild(span);
  }
  renderRange();

  await dispatch({ event: "initial" });
}

init();
</script>
</body>
</html>
"##;
