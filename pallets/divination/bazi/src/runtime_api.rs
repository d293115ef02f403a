//! # Bazi Engine Runtime API
//!
//! 供 RPC 层实时重算命盘的只读接口：不消耗 gas、不写存储，
//! 规则升级后旧命盘自动得到新算法的结果。

use crate::types::{ChartAnalysis, ChartInput, ClassicalChart};

sp_api::decl_runtime_apis! {
	/// 八字推演引擎 Runtime API
	pub trait BaziEngineApi {
		/// 实时推演分析记录（记录一）：格局、强弱、用神、
		/// 十神/八维分布与十六型标签
		fn chart_analysis(chart_id: u64) -> Option<ChartAnalysis>;

		/// 实时生成古典排盘记录（记录二）：十神、藏干、纳音、
		/// 长生、旬空与神煞注记
		fn classical_chart(chart_id: u64) -> Option<ClassicalChart>;

		/// 免存储试算：直接对输入排盘并推演，不触碰链上状态
		fn preview(input: ChartInput) -> Option<(ChartAnalysis, ClassicalChart)>;

		/// 当前规则参数版本号
		fn ruleset_version() -> u16;
	}
}
