//! # 能量推演管线（前半）
//!
//! 会局检出 → 合冲交互解算 → 季节加权与流通调整 → 能量聚合。
//!
//! 每一阶段只读上一阶段的输出并产出全新结构，阶段间互不回写，
//! 整条管线为纯函数：同一四柱必然得到逐位相同的结果。

use crate::constants::*;
use crate::types::*;
use sp_std::vec::Vec;

/// 单柱能量：天干能量 + 藏干片段能量（厘点）
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PillarEnergy {
	pub gan: TianGan,
	pub gan_energy: u32,
	/// 藏干片段，保持藏干表固有顺序
	pub hidden: Vec<(TianGan, u32)>,
}

/// 管线前半的汇总结果
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pipeline {
	pub ju: Option<Ju>,
	/// 当令五行（会局覆盖月令本气）
	pub seasonal: WuXing,
	pub interactions: InteractionOutcome,
	pub pillars: [PillarEnergy; 4],
	pub table: GanEnergyTable,
	pub total: u64,
	/// 温度分 = Σ 能量 × 十干温度系数
	pub temperature: i64,
}

/// 千分比安全除法：分母为零一律得 0，杜绝 NaN / Infinity 路径
pub fn ratio_pm(part: u64, total: u64) -> u16 {
	if total == 0 {
		return 0;
	}
	(part.saturating_mul(1000) / total) as u16
}

/// 百分比缩放
fn scale(value: u32, pct: u32) -> u32 {
	(value as u64 * pct as u64 / 100) as u32
}

// ============================================================================
// 会局检出
// ============================================================================

/// 扫描四支中的方局 / 三合局
///
/// 方局优先，同类中按常量表序取首个命中；命中后入局三支统一为局气，
/// 并覆盖下游一切"当令五行"判断。
pub fn detect_bureau(zhis: &[DiZhi; 4]) -> Option<Ju> {
	for (kind, triads) in [(JuKind::FangJu, &FANG_JU), (JuKind::SanHeJu, &SAN_HE_JU)] {
		for (triad, element) in triads.iter() {
			if triad.iter().all(|t| zhis.contains(t)) {
				let mut members = [false; 4];
				for (i, z) in zhis.iter().enumerate() {
					members[i] = triad.contains(z);
				}
				return Some(Ju { kind, element: *element, members });
			}
		}
	}
	None
}

/// 当令五行：会局气优先，否则取月支本气藏干之五行
pub fn seasonal_element(si_zhu: &SiZhu, ju: &Option<Ju>) -> WuXing {
	match ju {
		Some(j) => j.element,
		None => dominant_hidden_stem(si_zhu.month.zhi).wu_xing(),
	}
}

// ============================================================================
// 合冲交互解算
// ============================================================================

/// 解算天干五合、地支六合与六冲
///
/// 规则：
/// - 天干：仅相邻三对。化气合令则成（无惩罚）；不合令则双方受缚 ×0.7。
/// - 地支六合：仅相邻三对，优先于冲。化气不合令时对未缚参与者 ×0.7，
///   每支至多受罚一次；每组合检出记一笔 Ni 补偿（不论成败），
///   四支尽合改记一笔"全合"定额。
/// - 地支六冲：全部六对（不限相邻）。双方同在局内者冲被化解跳过；
///   相邻柱 ×0.6 记大额 Ne 补偿，隔柱 ×0.85 记小额；
///   四支尽冲改记一笔"全冲"定额。
///
/// 同一干支兼涉合与冲时乘数复合累乘。
pub fn resolve_interactions(si_zhu: &SiZhu, ju: &Option<Ju>, seasonal: WuXing) -> InteractionOutcome {
	let gans = si_zhu.gans();
	let zhis = si_zhu.zhis();
	let mut out = InteractionOutcome {
		gan_mult: [100; 4],
		zhi_mult: [100; 4],
		ne_comp: 0,
		ni_comp: 0,
		records: Vec::new(),
	};

	// 天干五合（相邻对）
	for i in 0..3usize {
		if let Some(target) = gan_he(gans[i], gans[i + 1]) {
			let success = target == seasonal;
			if !success {
				out.gan_mult[i] = scale(out.gan_mult[i], GAN_BOUND_PCT);
				out.gan_mult[i + 1] = scale(out.gan_mult[i + 1], GAN_BOUND_PCT);
			}
			out.records.push(InteractionRecord {
				kind: InteractionKind::GanHe,
				a: i as u8,
				b: (i + 1) as u8,
				success,
				mult_pct: if success { 100 } else { GAN_BOUND_PCT as u8 },
			});
		}
	}

	// 地支六合（相邻对，优先于冲）
	let mut he_bound = [false; 4];
	let mut he_penalized = [false; 4];
	for i in 0..3usize {
		if let Some(target) = zhi_liu_he(zhis[i], zhis[i + 1]) {
			let success = target == seasonal;
			if !success {
				for p in [i, i + 1] {
					if !he_penalized[p] {
						out.zhi_mult[p] = scale(out.zhi_mult[p], ZHI_HE_MISS_PCT);
						he_penalized[p] = true;
					}
				}
			}
			he_bound[i] = true;
			he_bound[i + 1] = true;
			out.ni_comp = out.ni_comp.saturating_add(NI_COMP_HE);
			out.records.push(InteractionRecord {
				kind: InteractionKind::ZhiHe,
				a: i as u8,
				b: (i + 1) as u8,
				success,
				mult_pct: if success { 100 } else { ZHI_HE_MISS_PCT as u8 },
			});
		}
	}
	if he_bound.iter().all(|b| *b) {
		out.ni_comp = NI_COMP_FULL_HE;
	}

	// 地支六冲（全对扫描）
	let mut chong_involved = [false; 4];
	for i in 0..4usize {
		for j in (i + 1)..4usize {
			if !zhi_chong(zhis[i], zhis[j]) {
				continue;
			}
			// 双方皆入局则冲已被局统一化解
			if let Some(j_info) = ju {
				if j_info.members[i] && j_info.members[j] {
					continue;
				}
			}
			let adjacent = j == i + 1;
			let (pct, comp) = if adjacent {
				(CHONG_ADJ_PCT, NE_COMP_CHONG_ADJ)
			} else {
				(CHONG_FAR_PCT, NE_COMP_CHONG_FAR)
			};
			out.zhi_mult[i] = scale(out.zhi_mult[i], pct);
			out.zhi_mult[j] = scale(out.zhi_mult[j], pct);
			out.ne_comp = out.ne_comp.saturating_add(comp);
			chong_involved[i] = true;
			chong_involved[j] = true;
			out.records.push(InteractionRecord {
				kind: InteractionKind::ZhiChong,
				a: i as u8,
				b: j as u8,
				success: true,
				mult_pct: pct as u8,
			});
		}
	}
	if chong_involved.iter().all(|b| *b) {
		out.ne_comp = NE_COMP_FULL_CHONG;
	}

	out
}

// ============================================================================
// 季节加权与流通调整
// ============================================================================

/// 干支流通关系 → `FLOW_MULTS` 下标
fn flow_index(gan_wx: WuXing, zhi_wx: WuXing) -> usize {
	if gan_wx == zhi_wx {
		0
	} else if zhi_wx.sheng() == gan_wx {
		1
	} else if gan_wx.sheng() == zhi_wx {
		2
	} else if zhi_wx.ke() == gan_wx {
		3
	} else {
		4
	}
}

/// 天干在四支藏干中是否有同气之根
fn has_root(gan: TianGan, zhis: &[DiZhi; 4]) -> bool {
	zhis.iter().any(|z| {
		hidden_stems(*z).iter().any(|(h, _)| h.wu_xing() == gan.wu_xing())
	})
}

/// 逐柱施加季节乘数环、干支流通调整与虚浮衰减
///
/// 乘数环作用于天干与藏干片段；流通调整只作用于天干，
/// 且月柱使用独立的一套放大乘数（月令权威更重）。
pub fn seasonal_flow(
	si_zhu: &SiZhu,
	seasonal: WuXing,
	interactions: &InteractionOutcome,
) -> [PillarEnergy; 4] {
	let zhis = si_zhu.zhis();
	let zhus = si_zhu.zhus();

	let build = |i: usize| -> PillarEnergy {
		let zhu = &zhus[i];
		let mut e = ENERGY_SCALE;
		e = scale(e, season_mult(seasonal, zhu.gan.wu_xing()));
		e = scale(e, interactions.gan_mult[i]);

		let mults = if i == 1 { &FLOW_MULTS_MONTH } else { &FLOW_MULTS };
		let dom_wx = dominant_hidden_stem(zhu.zhi).wu_xing();
		e = scale(e, mults[flow_index(zhu.gan.wu_xing(), dom_wx)]);

		if !has_root(zhu.gan, &zhis) {
			e = scale(e, ROOTLESS_PCT);
		}

		let mut hidden = Vec::new();
		for (g, w) in hidden_stems(zhu.zhi) {
			let mut frag = *w as u32;
			frag = scale(frag, season_mult(seasonal, g.wu_xing()));
			frag = scale(frag, interactions.zhi_mult[i]);
			hidden.push((*g, frag));
		}

		PillarEnergy { gan: zhu.gan, gan_energy: e, hidden }
	};

	[build(0), build(1), build(2), build(3)]
}

// ============================================================================
// 能量聚合
// ============================================================================

/// 聚合四柱能量为十干能量表
///
/// 藏干片段折减 ×0.8，透干（同干现于四天干）或与局气同行者不折。
pub fn aggregate_energy(
	pillars: &[PillarEnergy; 4],
	si_zhu: &SiZhu,
	ju: &Option<Ju>,
) -> GanEnergyTable {
	let gans = si_zhu.gans();
	let mut table = GanEnergyTable::default();

	for p in pillars.iter() {
		table.add(p.gan, p.gan_energy);
		for (g, frag) in p.hidden.iter() {
			let full_weight =
				gans.contains(g) || ju.as_ref().map_or(false, |j| j.element == g.wu_xing());
			let amount = if full_weight { *frag } else { scale(*frag, HIDDEN_DISCOUNT_PCT) };
			table.add(*g, amount);
		}
	}

	table
}

/// 温度分：逐干能量乘固定温度系数后求和
pub fn temperature_score(table: &GanEnergyTable) -> i64 {
	ALL_GAN
		.iter()
		.map(|g| table.get(*g) as i64 * TEMP_COEFF[g.index() as usize] as i64)
		.sum()
}

/// 运行管线前半：四柱 → 能量表
pub fn run_pipeline(si_zhu: &SiZhu) -> Pipeline {
	let zhis = si_zhu.zhis();
	let ju = detect_bureau(&zhis);
	let seasonal = seasonal_element(si_zhu, &ju);
	let interactions = resolve_interactions(si_zhu, &ju, seasonal);
	let pillars = seasonal_flow(si_zhu, seasonal, &interactions);
	let table = aggregate_energy(&pillars, si_zhu, &ju);
	let total = table.total();
	let temperature = temperature_score(&table);

	Pipeline { ju, seasonal, interactions, pillars, table, total, temperature }
}
