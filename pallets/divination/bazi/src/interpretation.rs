//! # 推演解读（管线后半）
//!
//! 格局判定 → 强弱分档 → 用神仲裁 → 八维功能映射与十六型标签，
//! 以及古典排盘注记的生成。
//!
//! 与前半同为纯函数层：输入能量表与四柱，输出完整记录，
//! 不触碰存储，可在链下 API 中自由重算。

use crate::calculations::{ratio_pm, run_pipeline, Pipeline};
use crate::constants::*;
use crate::types::*;
use frame_support::BoundedVec;

/// 百分比归一：最大余数法补齐，合计恒为 100（全零输入除外）
///
/// 余数平局按低位索引优先，保证逐位确定。
pub fn normalize_percent<const N: usize>(raw: &[u64; N]) -> [u8; N] {
	let total: u64 = raw.iter().sum();
	let mut out = [0u8; N];
	if total == 0 {
		return out;
	}
	let mut rems = [(0u64, 0usize); N];
	let mut assigned: u32 = 0;
	for i in 0..N {
		let scaled = raw[i] * 100;
		out[i] = (scaled / total) as u8;
		assigned += out[i] as u32;
		rems[i] = (scaled % total, i);
	}
	rems.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
	let mut left = 100u32.saturating_sub(assigned);
	for (_, i) in rems.iter() {
		if left == 0 {
			break;
		}
		out[*i] += 1;
		left -= 1;
	}
	out
}

// ============================================================================
// 格局判定
// ============================================================================

/// 十神 → 格局名（比肩归建禄、劫财归月刃）
fn ge_ju_of(tg: ShiShen) -> GeJu {
	match tg {
		ShiShen::ZhengGuan => GeJu::ZhengGuan,
		ShiShen::QiSha => GeJu::QiSha,
		ShiShen::ZhengCai => GeJu::ZhengCai,
		ShiShen::PianCai => GeJu::PianCai,
		ShiShen::ZhengYin => GeJu::ZhengYin,
		ShiShen::PianYin => GeJu::PianYin,
		ShiShen::ShiShen => GeJu::ShiShen,
		ShiShen::ShangGuan => GeJu::ShangGuan,
		ShiShen::BiJian => GeJu::JianLu,
		ShiShen::JieCai => GeJu::YueRen,
	}
}

/// 某五行的阳干代表
fn yang_stem_of(wx: WuXing) -> TianGan {
	match wx {
		WuXing::Mu => TianGan::Jia,
		WuXing::Huo => TianGan::Bing,
		WuXing::Tu => TianGan::Wu,
		WuXing::Jin => TianGan::Geng,
		WuXing::Shui => TianGan::Ren,
	}
}

/// 定格局
///
/// 会局成立时以局气阳干代表定格；四支尽入局且局气与日主同行者
/// 径取专旺。无局时扫月支藏干：首个透干且非比劫的片段定格，
/// 皆不透则以本气定格。
pub fn classify_pattern(si_zhu: &SiZhu, ju: &Option<Ju>) -> GeJu {
	let day = si_zhu.day_master();

	if let Some(j) = ju {
		if j.is_full() && j.element == day.wu_xing() {
			return GeJu::ZhuanWang;
		}
		return ge_ju_of(shi_shen_of(day, yang_stem_of(j.element)));
	}

	let gans = si_zhu.gans();
	for (g, _) in hidden_stems(si_zhu.month.zhi) {
		let tg = shi_shen_of(day, *g);
		if gans.contains(g) && tg.category() != ShiShenCategory::BiJie {
			return ge_ju_of(tg);
		}
	}
	ge_ju_of(shi_shen_of(day, dominant_hidden_stem(si_zhu.month.zhi)))
}

// ============================================================================
// 强弱分档
// ============================================================================

/// 比印占比（千分比）
pub fn peer_share_pm(table: &GanEnergyTable, day_master: TianGan, total: u64) -> u16 {
	let peer = table
		.category_energy(day_master, ShiShenCategory::BiJie)
		.saturating_add(table.category_energy(day_master, ShiShenCategory::Yin));
	ratio_pm(peer, total)
}

/// 五档强弱：比印占比对阈值表分档
pub fn classify_strength(share_pm: u16) -> QiangRuo {
	if share_pm > STRENGTH_JI_WANG_PM {
		QiangRuo::JiWang
	} else if share_pm >= STRENGTH_QIANG_PM {
		QiangRuo::Qiang
	} else if share_pm >= STRENGTH_ZHONG_HE_PM {
		QiangRuo::ZhongHeQiang
	} else if share_pm >= STRENGTH_JI_RUO_PM {
		QiangRuo::ZhongHeRuo
	} else {
		QiangRuo::JiRuo
	}
}

// ============================================================================
// 用神仲裁
// ============================================================================

/// 选用神
///
/// 调候需求：月支落炎燥/寒凝三支，或温度分越过阈值的临界月。
/// 调候用神取该行能量最高的在场干（同能取干序靠前者）。
/// 扶抑用神：候选池 =（全类 − 忌类）∪ 喜类中的在场干，
/// 按（是否喜类、十神顺位、能量、干序）四键排序取首。
/// 仲裁：中和带且调候行占比未超上限者调候优先，否则扶抑。
pub fn select_yong_shen(
	si_zhu: &SiZhu,
	pipe: &Pipeline,
	ge_ju: GeJu,
	qiang_ruo: QiangRuo,
) -> YongShenDecision {
	let day = si_zhu.day_master();
	let month_zhi = si_zhu.month.zhi;

	let climate_elem = if HOT_TRIAD.contains(&month_zhi) {
		Some(WuXing::Shui)
	} else if COLD_TRIAD.contains(&month_zhi) {
		Some(WuXing::Huo)
	} else if pipe.temperature > CLIMATE_TEMP_THRESHOLD {
		Some(WuXing::Shui)
	} else if pipe.temperature < -CLIMATE_TEMP_THRESHOLD {
		Some(WuXing::Huo)
	} else {
		None
	};

	let climate_god = climate_elem.and_then(|wx| {
		let mut best: Option<TianGan> = None;
		for g in ALL_GAN.iter().filter(|g| g.wu_xing() == wx) {
			let e = pipe.table.get(*g);
			if e == 0 {
				continue;
			}
			if best.map_or(true, |b| e > pipe.table.get(b)) {
				best = Some(*g);
			}
		}
		best
	});

	let rules = GE_JU_RULES[ge_ju.index() as usize];
	let (liked, disliked) =
		if qiang_ruo.is_strong() { (rules.0, rules.1) } else { (rules.2, rules.3) };
	let pool = (0b11111 & !disliked) | liked;

	let sort_key = |g: TianGan| -> (bool, u8, u64) {
		let tg = shi_shen_of(day, g);
		(tg.category().bit() & liked != 0, NICE_RANK[tg.index() as usize], pipe.table.get(g) as u64)
	};
	let mut balance_god: Option<TianGan> = None;
	for g in ALL_GAN {
		if pipe.table.get(g) == 0 {
			continue;
		}
		if shi_shen_of(day, g).category().bit() & pool == 0 {
			continue;
		}
		if balance_god.map_or(true, |b| sort_key(g) > sort_key(b)) {
			balance_god = Some(g);
		}
	}

	let climate_share_ok = climate_elem.map_or(false, |wx| {
		ratio_pm(pipe.table.element_energy(wx), pipe.total) as u64 <= CLIMATE_SHARE_LIMIT_PM
	});
	let (chosen, source) = if qiang_ruo.is_mid_range() && climate_share_ok && climate_god.is_some()
	{
		(climate_god, YongShenSource::Climate)
	} else if balance_god.is_some() {
		(balance_god, YongShenSource::Balance)
	} else {
		(None, YongShenSource::None)
	};

	YongShenDecision { climate_god, balance_god, chosen, source }
}

// ============================================================================
// 认知功能映射
// ============================================================================

/// 功能映射输出
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FunctionProfile {
	pub distribution: [u8; 8],
	pub mbti: MbtiType,
	pub dominant: CognitiveFunction,
	pub auxiliary: CognitiveFunction,
	pub inferior: CognitiveFunction,
}

/// 十神的有效功能向量：身弱受克内收防御、身强逢夺外放进攻，
/// 否则查基准权重矩阵
fn function_vector(tg: ShiShen, peer_share_pm: u16) -> &'static [u32; 8] {
	if peer_share_pm < WEAK_DEFENSE_PM
		&& matches!(tg, ShiShen::QiSha | ShiShen::ShangGuan | ShiShen::ZhengGuan)
	{
		return &DEFENSIVE_VEC;
	}
	if peer_share_pm > STRONG_ATTACK_PM
		&& matches!(tg, ShiShen::PianYin | ShiShen::JieCai | ShiShen::BiJian)
	{
		return &AGGRESSIVE_VEC;
	}
	&FUNC_WEIGHTS[tg.index() as usize]
}

/// 有效十神：透干于入局之柱者随局转性，以局气五行代入本干阴阳
fn effective_shi_shen(day: TianGan, gan: TianGan, si_zhu: &SiZhu, ju: &Option<Ju>) -> ShiShen {
	if let Some(j) = ju {
		let zhus = si_zhu.zhus();
		for (i, zhu) in zhus.iter().enumerate() {
			if zhu.gan == gan && j.members[i] {
				return shi_shen_by_element(day, j.element, gan.is_yang());
			}
		}
	}
	shi_shen_of(day, gan)
}

/// 能量表 → 八维功能分布与十六型标签
///
/// 两路贡献流：物理流逐干投影（日主能量放大后），社会流按十神
/// 汇总投影且格局基准十神享加成；合冲补偿分别注入 Ni / Ne。
/// 主功能取原始桶最大值（平局按功能表序），
/// 型号在主功能一致的两栈中取辅功能得分高者（平局按栈表序）。
pub fn map_cognitive_functions(
	si_zhu: &SiZhu,
	pipe: &Pipeline,
	ge_ju: GeJu,
	peer_share_pm: u16,
) -> FunctionProfile {
	let day = si_zhu.day_master();

	let mut weighted = [0u64; 10];
	for g in ALL_GAN {
		let mut w = pipe.table.get(g) as u64;
		if g == day {
			w = w * DAY_MASTER_AMP_PCT as u64 / 100;
		}
		weighted[g.index() as usize] = w;
	}
	let w_total: u64 = weighted.iter().sum();

	let mut buckets = [0u64; 8];
	if w_total > 0 {
		// 物理流
		for g in ALL_GAN {
			let w = weighted[g.index() as usize];
			if w == 0 {
				continue;
			}
			let vec = function_vector(effective_shi_shen(day, g, si_zhu, &pipe.ju), peer_share_pm);
			let pm = w * 1000 / w_total;
			for (fi, fw) in vec.iter().enumerate() {
				buckets[fi] += *fw as u64 * pm * PHYS_STREAM_PCT / 100;
			}
		}

		// 社会流
		let mut tg_energy = [0u64; 10];
		for g in ALL_GAN {
			let tg = effective_shi_shen(day, g, si_zhu, &pipe.ju);
			tg_energy[tg.index() as usize] += weighted[g.index() as usize];
		}
		let base_tg = ge_ju.base_shi_shen();
		for tg in ALL_SHI_SHEN {
			let e = tg_energy[tg.index() as usize];
			if e == 0 {
				continue;
			}
			let vec = function_vector(tg, peer_share_pm);
			let pm = e * 1000 / w_total;
			let boost = if tg == base_tg { PATTERN_BOOST_PCT } else { 100 };
			for (fi, fw) in vec.iter().enumerate() {
				buckets[fi] += *fw as u64 * pm * SOCIAL_STREAM_PCT * boost / 10_000;
			}
		}
	}

	let ne = CognitiveFunction::Ne.index() as usize;
	let ni = CognitiveFunction::Ni.index() as usize;
	buckets[ne] = buckets[ne].saturating_add(pipe.interactions.ne_comp as u64);
	buckets[ni] = buckets[ni].saturating_add(pipe.interactions.ni_comp as u64);

	let distribution = normalize_percent(&buckets);

	let mut dom = CognitiveFunction::Te;
	for f in ALL_FUNCTIONS {
		if buckets[f.index() as usize] > buckets[dom.index() as usize] {
			dom = f;
		}
	}

	let mut chosen = &MBTI_STACKS[0];
	let mut found = false;
	for entry in MBTI_STACKS.iter() {
		if entry.1[0] != dom {
			continue;
		}
		if !found || buckets[entry.1[1].index() as usize] > buckets[chosen.1[1].index() as usize] {
			chosen = entry;
			found = true;
		}
	}

	FunctionProfile {
		distribution,
		mbti: chosen.0,
		dominant: chosen.1[0],
		auxiliary: chosen.1[1],
		inferior: chosen.1[3],
	}
}

// ============================================================================
// 能量明细与十神分布
// ============================================================================

/// 十干能量明细：显性 = 能量最高干，或占比越过显性切点；
/// 占比低于潜性下限者一律潜性
pub fn stem_breakdown(pipe: &Pipeline) -> [StemEnergy; 10] {
	let mut top = TianGan::Jia;
	for g in ALL_GAN {
		if pipe.table.get(g) > pipe.table.get(top) {
			top = g;
		}
	}
	let build = |g: TianGan| -> StemEnergy {
		let energy = pipe.table.get(g);
		let share_pm = ratio_pm(energy as u64, pipe.total);
		let mode = if share_pm < LATENT_PM {
			DisplayMode::Latent
		} else if g == top || share_pm >= MANIFEST_PM {
			DisplayMode::Manifest
		} else {
			DisplayMode::Latent
		};
		StemEnergy { gan: g, energy, share_pm, mode }
	};
	[
		build(TianGan::Jia),
		build(TianGan::Yi),
		build(TianGan::Bing),
		build(TianGan::Ding),
		build(TianGan::Wu),
		build(TianGan::Ji),
		build(TianGan::Geng),
		build(TianGan::Xin),
		build(TianGan::Ren),
		build(TianGan::Gui),
	]
}

/// 十神能量分布（百分比，合计恰 100）
pub fn shi_shen_distribution(day_master: TianGan, table: &GanEnergyTable) -> [u8; 10] {
	let mut raw = [0u64; 10];
	for g in ALL_GAN {
		raw[shi_shen_of(day_master, g).index() as usize] += table.get(g) as u64;
	}
	normalize_percent(&raw)
}

// ============================================================================
// 古典注记
// ============================================================================

/// 本柱命中的神煞，按 `ShenSha` 枚举序收集
fn shen_sha_hits(si_zhu: &SiZhu, wei: ZhuWei, gz: &GanZhi) -> BoundedVec<ShenSha, frame_support::pallet_prelude::ConstU32<16>> {
	let day_gan = si_zhu.day.gan;
	let day_zhi = si_zhu.day.zhi;
	let year_zhi = si_zhu.year.zhi;
	let month_zhi = si_zhu.month.zhi;
	let z = gz.zhi;

	// 年支日支双锚的支系神煞
	let dual = |f: fn(DiZhi) -> DiZhi| f(year_zhi) == z || f(day_zhi) == z;

	let mut hits = BoundedVec::default();
	let mut push = |s: ShenSha| {
		let _ = hits.try_push(s);
	};

	if tian_yi_targets(day_gan).contains(&z) {
		push(ShenSha::TianYiGuiRen);
	}
	if wen_chang_target(day_gan) == z {
		push(ShenSha::WenChangGuiRen);
	}
	if lu_shen_target(day_gan) == z {
		push(ShenSha::LuShen);
	}
	if yang_ren_target(day_gan) == Some(z) {
		push(ShenSha::YangRen);
	}
	if dual(tao_hua_target) {
		push(ShenSha::TaoHua);
	}
	if dual(yi_ma_target) {
		push(ShenSha::YiMa);
	}
	if dual(hua_gai_target) {
		push(ShenSha::HuaGai);
	}
	if dual(jiang_xing_target) {
		push(ShenSha::JiangXing);
	}
	if hong_luan_target(year_zhi) == z {
		push(ShenSha::HongLuan);
	}
	if tian_xi_target(year_zhi) == z {
		push(ShenSha::TianXi);
	}
	let (gu_chen, gua_su) = gu_chen_gua_su(year_zhi);
	if gu_chen == z {
		push(ShenSha::GuChen);
	}
	if gua_su == z {
		push(ShenSha::GuaSu);
	}
	if dual(jie_sha_target) {
		push(ShenSha::JieSha);
	}
	if dual(wang_shen_target) {
		push(ShenSha::WangShen);
	}
	match tian_de_target(month_zhi) {
		GanOrZhi::Gan(g) if g == gz.gan => push(ShenSha::TianDeGuiRen),
		GanOrZhi::Zhi(t) if t == z => push(ShenSha::TianDeGuiRen),
		_ => {},
	}
	if yue_de_target(month_zhi) == gz.gan {
		push(ShenSha::YueDeGuiRen);
	}
	if jin_yu_target(day_gan) == z {
		push(ShenSha::JinYu);
	}

	// 日柱专属（以六十甲子索引查日表）
	if wei == ZhuWei::Day {
		let idx = gz.index();
		if KUI_GANG_DAYS.contains(&idx) {
			push(ShenSha::KuiGang);
		}
		if SHI_LING_DAYS.contains(&idx) {
			push(ShenSha::ShiLingRi);
		}
		if JIN_SHEN_DAYS.contains(&idx) {
			push(ShenSha::JinShen);
		}
		if YIN_CHA_YANG_CUO_DAYS.contains(&idx) {
			push(ShenSha::YinChaYangCuo);
		}
		if GU_LUAN_DAYS.contains(&idx) {
			push(ShenSha::GuLuan);
		}
	}

	hits
}

/// 生成古典排盘记录
///
/// 逐柱注记十神、藏干、纳音、长生、自坐、旬空与神煞。
/// `(si_zhu, day_master)` 已含外部大运推算所需的全部输入。
pub fn build_classical_chart(si_zhu: &SiZhu) -> ClassicalChart {
	let day = si_zhu.day_master();
	let zhus = si_zhu.zhus();

	let build = |i: usize| -> ZhuAnnotation {
		let gz = zhus[i];
		let mut cang_gan = BoundedVec::default();
		for (g, w) in hidden_stems(gz.zhi) {
			let _ = cang_gan.try_push(CangGanInfo {
				gan: *g,
				shi_shen: shi_shen_of(day, *g),
				weight: *w,
			});
		}
		ZhuAnnotation {
			gan_zhi: gz,
			gan_shi_shen: shi_shen_of(day, gz.gan),
			cang_gan,
			na_yin: nayin_index(&gz),
			chang_sheng: chang_sheng_stage(day, gz.zhi),
			zi_zuo: zi_zuo(gz.zhi),
			kong_wang: kong_wang(&gz),
			shen_sha: shen_sha_hits(si_zhu, ALL_ZHU_WEI[i], &gz),
		}
	};

	ClassicalChart {
		si_zhu: *si_zhu,
		day_master: day,
		zhus: [build(0), build(1), build(2), build(3)],
	}
}

// ============================================================================
// 报告装配
// ============================================================================

/// 完整推演：四柱 → 分析记录（记录一）
pub fn analyze(si_zhu: &SiZhu) -> ChartAnalysis {
	let pipe = run_pipeline(si_zhu);
	let day = si_zhu.day_master();

	let ge_ju = classify_pattern(si_zhu, &pipe.ju);
	let peer = peer_share_pm(&pipe.table, day, pipe.total);
	let qiang_ruo = classify_strength(peer);
	let yong_shen = select_yong_shen(si_zhu, &pipe, ge_ju, qiang_ruo);
	let profile = map_cognitive_functions(si_zhu, &pipe, ge_ju, peer);

	log::debug!(
		target: "bazi-engine",
		"推演完成: 格局={:?} 强弱={:?} 比印占比={}‰ 用神={:?}",
		ge_ju, qiang_ruo, peer, yong_shen.chosen,
	);

	ChartAnalysis {
		si_zhu: *si_zhu,
		mbti: profile.mbti,
		dominant: profile.dominant,
		auxiliary: profile.auxiliary,
		inferior: profile.inferior,
		ge_ju,
		qiang_ruo,
		peer_share_pm: peer,
		yong_shen,
		shi_shen_distribution: shi_shen_distribution(day, &pipe.table),
		function_distribution: profile.distribution,
		stem_breakdown: stem_breakdown(&pipe),
	}
}
