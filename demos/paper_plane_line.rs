//! 紙飛機產線示例
//!
//! 用法: cargo run --example paper_plane_line [process.json]

use prodline::{
    BreakdownCalculator, FlowGraphBuilder, FlowNodeKind, LineCalculator, ProcessLine, RunParameters,
    TimeSeriesCalculator, WaterfallCalculator,
};

fn main() -> anyhow::Result<()> {
    prodline::logging::init();

    // 指定 JSON 檔時載入，否則使用預設工序目錄
    let line = match std::env::args().nth(1) {
        Some(path) => ProcessLine::from_json(&std::fs::read_to_string(path)?)?,
        None => ProcessLine::with_default_catalog(),
    };
    let params = RunParameters::default();

    println!("=== 紙飛機產線分析 ===\n");
    println!(
        "運行時間 {} 分鐘，售價 {}，材料成本 {}\n",
        params.runtime, params.sale_price_per_unit, params.material_cost_per_unit
    );

    let results = LineCalculator::new(params).calculate(line.steps())?;

    println!("工序明細:");
    for step in &results.steps {
        println!(
            "  - {:<20} 有效週期 {:>6.2}  閒置 {:>7.2} 分  間接成本 {:>8.2}  不良成本 {:>7.2}",
            step.name(),
            step.effective_cycle_time,
            step.idle_time,
            step.overhead_cost,
            step.fail_cost()
        );
    }

    println!("\n瓶頸工序: {}", results.bottleneck().name());
    println!("理想產能: {:.2} 件", results.ideal_throughput);
    println!("良品數量: {:.2} 件", results.final_good_units);

    println!("\n瀑布圖:");
    for entry in WaterfallCalculator::build(&results) {
        println!("  {:<14} {:>12.2}", entry.label, entry.value);
    }

    println!("\n每工序成本:");
    for item in BreakdownCalculator::per_step(&results) {
        println!("  {:<20} {:>10.2}", item.step_name, item.total());
    }

    let series = TimeSeriesCalculator::project(&results);
    if let Some(break_even) = series.iter().find(|p| p.profit >= rust_decimal::Decimal::ZERO) {
        println!("\n損益兩平時間: 第 {} 分鐘", break_even.minute);
    } else {
        println!("\n運行期間內未達損益兩平");
    }

    println!("\n物料流向（每 100 單位投入）:");
    let graph = FlowGraphBuilder::build_default(line.steps())?;
    for edge in &graph.edges {
        let target = &graph.nodes[edge.target];
        let arrow = match target.kind {
            FlowNodeKind::Step => "→",
            FlowNodeKind::DefectSink => "✗",
        };
        println!(
            "  {:<20} {} {:<28} {:>7.2}",
            graph.nodes[edge.source].label, arrow, target.label, edge.value
        );
    }
    println!("  最終產出: {:.2}", graph.final_output);

    println!("\n{}", serde_json::to_string_pretty(&BreakdownCalculator::defect_overview(&results))?);

    Ok(())
}
