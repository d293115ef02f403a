//! # 单元测试
//!
//! 覆盖：干支历转换、规则表完备性、会局与合冲解算、能量不变量、
//! 格局/强弱/用神判定、功能分布归一、古典注记与外部接口。

use crate::calculations::*;
use crate::calendar;
use crate::constants::*;
use crate::interpretation::*;
use crate::mock::*;
use crate::types::*;
use crate::{Error, Event};
use frame_support::{assert_noop, assert_ok, BoundedVec};

fn gz(gan: TianGan, zhi: DiZhi) -> GanZhi {
	GanZhi { gan, zhi }
}

fn si_zhu(
	gans: [TianGan; 4],
	zhis: [DiZhi; 4],
) -> SiZhu {
	SiZhu {
		year: gz(gans[0], zhis[0]),
		month: gz(gans[1], zhis[1]),
		day: gz(gans[2], zhis[2]),
		hour: gz(gans[3], zhis[3]),
	}
}

/// 基准测试盘：甲乙丙丁 × 子丑寅卯，日主丙
fn reference_chart() -> SiZhu {
	si_zhu(
		[TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding],
		[DiZhi::Zi, DiZhi::Chou, DiZhi::Yin, DiZhi::Mao],
	)
}

// ============================================================================
// 干支历
// ============================================================================

#[test]
fn ganzhi_index_roundtrip_covers_full_cycle() {
	for idx in 0..60u8 {
		let gz = GanZhi::from_index(idx).unwrap();
		assert_eq!(gz.index(), idx);
	}
	assert!(GanZhi::from_index(60).is_none());
}

#[test]
fn day_pillar_matches_anchor() {
	// 锚点：1949-10-01 甲子日
	let anchor = calendar::day_ganzhi(1949, 10, 1).unwrap();
	assert_eq!(anchor, gz(TianGan::Jia, DiZhi::Zi));
	// 1990-01-01 丙寅日
	let d = calendar::day_ganzhi(1990, 1, 1).unwrap();
	assert_eq!(d, gz(TianGan::Bing, DiZhi::Yin));
}

#[test]
fn year_pillar_flips_at_li_chun() {
	// 立春前属上一年：1990-02-03 仍为己巳年
	assert_eq!(
		calendar::year_ganzhi(1990, 2, 3).unwrap(),
		gz(TianGan::Ji, DiZhi::Si)
	);
	// 立春当日换年：1990-02-04 庚午年
	assert_eq!(
		calendar::year_ganzhi(1990, 2, 4).unwrap(),
		gz(TianGan::Geng, DiZhi::WuZ)
	);
}

#[test]
fn resolve_builds_expected_pillars() {
	// 1990-01-01 12:00 北京时间：己巳 丙子 丙寅 甲午
	let sz = calendar::resolve(1990, 1, 1, 12, 0, None).unwrap();
	assert_eq!(sz.year, gz(TianGan::Ji, DiZhi::Si));
	assert_eq!(sz.month, gz(TianGan::Bing, DiZhi::Zi));
	assert_eq!(sz.day, gz(TianGan::Bing, DiZhi::Yin));
	assert_eq!(sz.hour, gz(TianGan::Jia, DiZhi::WuZ));
}

#[test]
fn solar_time_shift_only_moves_hour_pillar() {
	// 乌鲁木齐 87.6°E：时差 (876000 - 1200000) × 4 / 10000 = -129 分钟
	assert_eq!(calendar::solar_time_shift_minutes(876_000), -129);

	let plain = calendar::resolve(1990, 1, 1, 12, 0, None).unwrap();
	let shifted = calendar::resolve(1990, 1, 1, 12, 0, Some(876_000)).unwrap();
	// 12:00 - 129min = 09:51 → 巳时
	assert_eq!(shifted.hour.zhi, DiZhi::Si);
	// 年月日三柱不动
	assert_eq!(shifted.year, plain.year);
	assert_eq!(shifted.month, plain.month);
	assert_eq!(shifted.day, plain.day);
}

#[test]
fn resolve_rejects_invalid_moments() {
	assert!(calendar::resolve(1899, 1, 1, 0, 0, None).is_none());
	assert!(calendar::resolve(1990, 2, 29, 0, 0, None).is_none());
	assert!(calendar::resolve(1990, 1, 1, 24, 0, None).is_none());
	assert!(calendar::resolve(1990, 1, 1, 12, 60, None).is_none());
	// 闰年二月廿九合法
	assert!(calendar::resolve(2000, 2, 29, 0, 0, None).is_some());
}

// ============================================================================
// 规则表完备性
// ============================================================================

#[test]
fn hidden_stem_weights_sum_to_100_for_every_branch() {
	for z in ALL_ZHI {
		let sum: u32 = hidden_stems(z).iter().map(|(_, w)| *w as u32).sum();
		assert_eq!(sum, 100, "{:?}", z);
	}
}

#[test]
fn function_weight_rows_sum_to_100() {
	for (i, row) in FUNC_WEIGHTS.iter().enumerate() {
		assert_eq!(row.iter().sum::<u32>(), 100, "row {}", i);
	}
	assert_eq!(DEFENSIVE_VEC.iter().sum::<u32>(), 100);
	assert_eq!(AGGRESSIVE_VEC.iter().sum::<u32>(), 100);
}

#[test]
fn ten_gods_follow_cycle_and_polarity() {
	// 日主丙火：壬为七杀（克我同阳），癸为正官（克我异阴阳）
	assert_eq!(shi_shen_of(TianGan::Bing, TianGan::Ren), ShiShen::QiSha);
	assert_eq!(shi_shen_of(TianGan::Bing, TianGan::Gui), ShiShen::ZhengGuan);
	// 甲为偏印（生我同阳），戊为食神（我生同阳）
	assert_eq!(shi_shen_of(TianGan::Bing, TianGan::Jia), ShiShen::PianYin);
	assert_eq!(shi_shen_of(TianGan::Bing, TianGan::Wu), ShiShen::ShiShen);
	// 自身为比肩
	assert_eq!(shi_shen_of(TianGan::Bing, TianGan::Bing), ShiShen::BiJian);
}

#[test]
fn kong_wang_of_jia_zi_is_xu_hai() {
	let pair = kong_wang(&gz(TianGan::Jia, DiZhi::Zi));
	assert_eq!(pair, (DiZhi::Xu, DiZhi::Hai));
	// 同旬的丙寅空亡相同
	assert_eq!(kong_wang(&gz(TianGan::Bing, DiZhi::Yin)), pair);
}

#[test]
fn chang_sheng_follows_yang_forward_yin_backward() {
	// 甲长生在亥，帝旺在卯
	assert_eq!(chang_sheng_stage(TianGan::Jia, DiZhi::Hai), ChangSheng::ZhangSheng);
	assert_eq!(chang_sheng_stage(TianGan::Jia, DiZhi::Mao), ChangSheng::DiWang);
	// 阴干逆行：乙长生在午，临官在卯，帝旺在寅
	assert_eq!(chang_sheng_stage(TianGan::Yi, DiZhi::WuZ), ChangSheng::ZhangSheng);
	assert_eq!(chang_sheng_stage(TianGan::Yi, DiZhi::Mao), ChangSheng::LinGuan);
	assert_eq!(chang_sheng_stage(TianGan::Yi, DiZhi::Yin), ChangSheng::DiWang);
	// 癸禄在子：自坐临官
	assert_eq!(chang_sheng_stage(TianGan::Gui, DiZhi::Zi), ChangSheng::LinGuan);
	assert_eq!(zi_zuo(DiZhi::Zi), ChangSheng::LinGuan);
}

#[test]
fn nayin_rejects_polarity_mismatch() {
	// 甲子 → 海中金（索引 0）
	assert_eq!(nayin_index(&gz(TianGan::Jia, DiZhi::Zi)), Some(0));
	assert_eq!(nayin_name(0), Some("海中金"));
	// 甲丑为阴阳错配的直录组合，无纳音
	assert_eq!(nayin_index(&gz(TianGan::Jia, DiZhi::Chou)), None);
}

// ============================================================================
// 会局与合冲
// ============================================================================

#[test]
fn bureau_detects_directional_and_triangular() {
	// 寅卯辰 → 木方局
	let ju = detect_bureau(&[DiZhi::Yin, DiZhi::Mao, DiZhi::Chen, DiZhi::Zi]).unwrap();
	assert_eq!(ju.kind, JuKind::FangJu);
	assert_eq!(ju.element, WuXing::Mu);
	assert_eq!(ju.members, [true, true, true, false]);
	assert!(!ju.is_full());

	// 申子辰 → 水三合局
	let ju = detect_bureau(&[DiZhi::Shen, DiZhi::Zi, DiZhi::Chen, DiZhi::WuZ]).unwrap();
	assert_eq!(ju.kind, JuKind::SanHeJu);
	assert_eq!(ju.element, WuXing::Shui);

	// 重复支也计入局：寅午戌 + 午 四支尽入
	let ju = detect_bureau(&[DiZhi::Yin, DiZhi::WuZ, DiZhi::Xu, DiZhi::WuZ]).unwrap();
	assert!(ju.is_full());

	assert!(detect_bureau(&[DiZhi::Zi, DiZhi::Chou, DiZhi::Yin, DiZhi::Mao]).is_none());
}

#[test]
fn interactions_score_he_and_chong() {
	// 子丑合（化土得令成功）、子午隔柱冲
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding],
		[DiZhi::Zi, DiZhi::Chou, DiZhi::WuZ, DiZhi::Xu],
	);
	let ju = detect_bureau(&sz.zhis());
	assert!(ju.is_none());
	let seasonal = seasonal_element(&sz, &ju);
	assert_eq!(seasonal, WuXing::Tu);

	let out = resolve_interactions(&sz, &ju, seasonal);
	// 合化成功不罚；子午隔柱冲 ×85
	assert_eq!(out.zhi_mult, [85, 100, 85, 100]);
	assert_eq!(out.ni_comp, NI_COMP_HE);
	assert_eq!(out.ne_comp, NE_COMP_CHONG_FAR);
	assert_eq!(out.gan_mult, [100; 4]);
}

#[test]
fn failed_gan_he_binds_both_stems() {
	// 甲己合化土，月令为木（寅月无局）→ 合而不化，双方受缚
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Ji, TianGan::Bing, TianGan::Ding],
		[DiZhi::Zi, DiZhi::Yin, DiZhi::Shen, DiZhi::Mao],
	);
	let ju = detect_bureau(&sz.zhis());
	let seasonal = seasonal_element(&sz, &ju);
	assert_eq!(seasonal, WuXing::Mu);

	let out = resolve_interactions(&sz, &ju, seasonal);
	assert_eq!(out.gan_mult[0], GAN_BOUND_PCT);
	assert_eq!(out.gan_mult[1], GAN_BOUND_PCT);
	assert_eq!(out.gan_mult[2], 100);
}

#[test]
fn full_clash_replaces_accumulated_compensation() {
	// 子午子午：四支尽数犯冲 → 一次性全冲定额
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding],
		[DiZhi::Zi, DiZhi::WuZ, DiZhi::Zi, DiZhi::WuZ],
	);
	let ju = detect_bureau(&sz.zhis());
	let seasonal = seasonal_element(&sz, &ju);
	let out = resolve_interactions(&sz, &ju, seasonal);
	assert_eq!(out.ne_comp, NE_COMP_FULL_CHONG);
}

#[test]
fn full_combination_replaces_accumulated_compensation() {
	// 寅亥合、卯戌合：四支尽数入合 → 一次性全合定额，而非两笔累加
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding],
		[DiZhi::Yin, DiZhi::Hai, DiZhi::Mao, DiZhi::Xu],
	);
	let ju = detect_bureau(&sz.zhis());
	assert!(ju.is_none());
	let seasonal = seasonal_element(&sz, &ju);
	assert_eq!(seasonal, WuXing::Shui);

	let out = resolve_interactions(&sz, &ju, seasonal);
	// 化木、化火均非当令之水 → 两合皆不化，四支各受缚一次
	assert_eq!(out.zhi_mult, [ZHI_HE_MISS_PCT; 4]);
	assert_eq!(out.ni_comp, NI_COMP_FULL_HE);
	assert_ne!(out.ni_comp, 2 * NI_COMP_HE);
	assert_eq!(out.ne_comp, 0);
}

// ============================================================================
// 能量不变量
// ============================================================================

#[test]
fn pipeline_is_deterministic() {
	let sz = reference_chart();
	let a = run_pipeline(&sz);
	let b = run_pipeline(&sz);
	assert_eq!(a.table, b.table);
	assert_eq!(a.temperature, b.temperature);
	assert_eq!(analyze(&sz), analyze(&sz));
}

#[test]
fn energy_table_is_positive_and_total_consistent() {
	let pipe = run_pipeline(&reference_chart());
	assert!(pipe.total > 0);
	assert_eq!(pipe.table.total(), pipe.total);
	// 四天干必有能量入表
	for g in reference_chart().gans() {
		assert!(pipe.table.get(g) > 0, "{:?}", g);
	}
}

#[test]
fn normalize_percent_always_sums_to_100() {
	assert_eq!(normalize_percent(&[0u64; 8]), [0u8; 8]);

	let out = normalize_percent(&[1u64, 1, 1, 0, 0, 0, 0, 0]);
	assert_eq!(out.iter().map(|v| *v as u32).sum::<u32>(), 100);
	// 余数平局按低位索引优先
	assert_eq!(out[0], 34);
	assert_eq!(out[1], 33);

	let out = normalize_percent(&[7u64, 13, 29, 51]);
	assert_eq!(out.iter().map(|v| *v as u32).sum::<u32>(), 100);
}

#[test]
fn distributions_in_analysis_sum_to_100() {
	// 北京 116.4°E 的真太阳时修正盘一并覆盖
	for sz in [
		reference_chart(),
		calendar::resolve(1990, 1, 1, 12, 0, None).unwrap(),
		calendar::resolve(1990, 1, 1, 12, 0, Some(1_164_000)).unwrap(),
	] {
		let a = analyze(&sz);
		assert_eq!(a.shi_shen_distribution.iter().map(|v| *v as u32).sum::<u32>(), 100);
		assert_eq!(a.function_distribution.iter().map(|v| *v as u32).sum::<u32>(), 100);
	}
}

// ============================================================================
// 格局 / 强弱 / 用神
// ============================================================================

#[test]
fn strength_tiers_honor_thresholds() {
	assert_eq!(classify_strength(901), QiangRuo::JiWang);
	assert_eq!(classify_strength(900), QiangRuo::Qiang);
	assert_eq!(classify_strength(720), QiangRuo::Qiang);
	assert_eq!(classify_strength(719), QiangRuo::ZhongHeQiang);
	assert_eq!(classify_strength(500), QiangRuo::ZhongHeQiang);
	assert_eq!(classify_strength(499), QiangRuo::ZhongHeRuo);
	assert_eq!(classify_strength(240), QiangRuo::ZhongHeRuo);
	assert_eq!(classify_strength(239), QiangRuo::JiRuo);
}

#[test]
fn full_bureau_matching_day_master_is_zhuan_wang() {
	// 寅午戌（重午）四支尽入火局，日主丙火 → 专旺
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Bing, TianGan::Bing, TianGan::Wu],
		[DiZhi::Yin, DiZhi::WuZ, DiZhi::Xu, DiZhi::WuZ],
	);
	let ju = detect_bureau(&sz.zhis());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::ZhuanWang);

	// 同局而日主庚金：以火局阳干丙定格 → 七杀格
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Bing, TianGan::Geng, TianGan::Wu],
		[DiZhi::Yin, DiZhi::WuZ, DiZhi::Xu, DiZhi::WuZ],
	);
	let ju = detect_bureau(&sz.zhis());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::QiSha);
}

#[test]
fn month_scan_prefers_revealed_non_peer_fragment() {
	// 日主丙、月支寅（藏甲丙戊）：本气甲透年干且非比劫 → 偏印格
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Geng, TianGan::Bing, TianGan::Xin],
		[DiZhi::Zi, DiZhi::Yin, DiZhi::Shen, DiZhi::Mao],
	);
	let ju = detect_bureau(&sz.zhis());
	assert!(ju.is_none());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::PianYin);

	// 皆不透时取月支本气：日主甲、月支酉藏辛，辛不透 → 正官格
	let sz = si_zhu(
		[TianGan::Ren, TianGan::Bing, TianGan::Jia, TianGan::Wu],
		[DiZhi::Yin, DiZhi::You, DiZhi::Shen, DiZhi::Chen],
	);
	let ju = detect_bureau(&sz.zhis());
	assert!(ju.is_none());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::ZhengGuan);
}

#[test]
fn peer_month_stem_maps_to_jian_lu_or_yue_ren() {
	// 日主甲、月支寅藏甲丙戊：甲透但为比肩跳过，丙透 → 食神格；
	// 此处让丙戊皆不透，走本气兜底：甲为比肩 → 建禄格
	let sz = si_zhu(
		[TianGan::Ren, TianGan::Jia, TianGan::Jia, TianGan::Gui],
		[DiZhi::Zi, DiZhi::Yin, DiZhi::Shen, DiZhi::You],
	);
	let ju = detect_bureau(&sz.zhis());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::JianLu);

	// 日主乙对甲为劫财：兜底 → 月刃格
	let sz = si_zhu(
		[TianGan::Ren, TianGan::Jia, TianGan::Yi, TianGan::Gui],
		[DiZhi::Zi, DiZhi::Yin, DiZhi::Shen, DiZhi::You],
	);
	let ju = detect_bureau(&sz.zhis());
	assert_eq!(classify_pattern(&sz, &ju), GeJu::YueRen);
}

#[test]
fn yong_shen_decision_is_internally_consistent() {
	for sz in [reference_chart(), calendar::resolve(1990, 1, 1, 12, 0, None).unwrap()] {
		let a = analyze(&sz);
		match a.yong_shen.source {
			YongShenSource::Climate => assert_eq!(a.yong_shen.chosen, a.yong_shen.climate_god),
			YongShenSource::Balance => assert_eq!(a.yong_shen.chosen, a.yong_shen.balance_god),
			YongShenSource::None => assert_eq!(a.yong_shen.chosen, None),
		}
	}
}

#[test]
fn cold_month_requests_fire_climate_god() {
	// 子月寒凝：调候需求为火，丙在场 → 调候用神为丙
	let sz = calendar::resolve(1990, 1, 1, 12, 0, None).unwrap();
	let a = analyze(&sz);
	assert_eq!(a.yong_shen.climate_god, Some(TianGan::Bing));
}

// ============================================================================
// 功能映射与十六型
// ============================================================================

#[test]
fn mbti_label_matches_function_stack() {
	for sz in [
		reference_chart(),
		calendar::resolve(1990, 1, 1, 12, 0, None).unwrap(),
		calendar::resolve(1984, 8, 8, 8, 0, None).unwrap(),
	] {
		let a = analyze(&sz);
		let stack = MBTI_STACKS
			.iter()
			.find(|(m, _)| *m == a.mbti)
			.map(|(_, s)| *s)
			.unwrap();
		assert_eq!(a.dominant, stack[0]);
		assert_eq!(a.auxiliary, stack[1]);
		assert_eq!(a.inferior, stack[3]);
	}
}

#[test]
fn stem_breakdown_shares_are_plausible() {
	let a = analyze(&reference_chart());
	let mut manifest_seen = false;
	for s in a.stem_breakdown.iter() {
		assert!(s.share_pm <= 1000);
		if s.mode == DisplayMode::Manifest {
			manifest_seen = true;
			assert!(s.share_pm >= LATENT_PM);
		}
	}
	assert!(manifest_seen);
}

// ============================================================================
// 古典注记
// ============================================================================

#[test]
fn classical_chart_annotates_reference_pillars() {
	let sz = reference_chart();
	let chart = build_classical_chart(&sz);
	assert_eq!(chart.day_master, TianGan::Bing);

	// 日柱丙寅：天干相对自身为比肩
	assert_eq!(chart.zhus[2].gan_shi_shen, ShiShen::BiJian);

	// 月柱丑：藏干己癸辛，比例 60/30/10
	let cang: Vec<(TianGan, u8)> =
		chart.zhus[1].cang_gan.iter().map(|c| (c.gan, c.weight)).collect();
	assert_eq!(
		cang,
		vec![(TianGan::Ji, 60), (TianGan::Gui, 30), (TianGan::Xin, 10)]
	);
	let sum: u32 = chart.zhus[1].cang_gan.iter().map(|c| c.weight as u32).sum();
	assert_eq!(sum, 100);

	// 甲子年柱属甲子旬：空亡戌亥
	assert_eq!(chart.zhus[0].kong_wang, (DiZhi::Xu, DiZhi::Hai));
}

#[test]
fn day_only_stars_stay_on_day_pillar() {
	// 四柱皆庚辰：魁罡只标注于日柱
	let sz = si_zhu(
		[TianGan::Geng, TianGan::Geng, TianGan::Geng, TianGan::Geng],
		[DiZhi::Chen, DiZhi::Chen, DiZhi::Chen, DiZhi::Chen],
	);
	let chart = build_classical_chart(&sz);
	assert!(chart.zhus[2].shen_sha.contains(&ShenSha::KuiGang));
	assert!(!chart.zhus[0].shen_sha.contains(&ShenSha::KuiGang));
	assert!(!chart.zhus[1].shen_sha.contains(&ShenSha::KuiGang));
	assert!(!chart.zhus[3].shen_sha.contains(&ShenSha::KuiGang));
}

#[test]
fn lu_shen_marks_branch_of_day_stem() {
	// 日主丙禄在巳：年支巳得禄神
	let sz = si_zhu(
		[TianGan::Ji, TianGan::Bing, TianGan::Bing, TianGan::Jia],
		[DiZhi::Si, DiZhi::Zi, DiZhi::Yin, DiZhi::WuZ],
	);
	let chart = build_classical_chart(&sz);
	assert!(chart.zhus[0].shen_sha.contains(&ShenSha::LuShen));
}

#[test]
fn direct_mode_mismatch_pillar_has_no_nayin() {
	// 直录甲丑柱：阴阳错配无纳音，其余注记照常
	let sz = si_zhu(
		[TianGan::Jia, TianGan::Yi, TianGan::Bing, TianGan::Ding],
		[DiZhi::Chou, DiZhi::Mao, DiZhi::Yin, DiZhi::Mao],
	);
	let chart = build_classical_chart(&sz);
	assert_eq!(chart.zhus[0].na_yin, None);
	assert!(chart.zhus[2].na_yin.is_some());
	assert_eq!(chart.zhus[0].cang_gan.len(), 3);
}

// ============================================================================
// 外部接口
// ============================================================================

#[test]
fn create_chart_stores_record_and_emits_event() {
	new_test_ext().execute_with(|| {
		let input = ChartInput::Solar {
			year: 1990,
			month: 1,
			day: 1,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		assert_ok!(BaziEngine::create_chart(RuntimeOrigin::signed(1), input));

		let record = BaziEngine::chart_by_id(0).unwrap();
		assert_eq!(record.owner, 1);
		assert_eq!(record.si_zhu, calendar::resolve(1990, 1, 1, 12, 0, None).unwrap());
		assert_eq!(BaziEngine::user_charts(1).to_vec(), vec![0]);
		assert_eq!(BaziEngine::next_chart_id(), 1);

		System::assert_last_event(
			Event::ChartCreated { owner: 1, chart_id: 0, si_zhu: record.si_zhu }.into(),
		);
	});
}

#[test]
fn create_chart_rejects_bad_input() {
	new_test_ext().execute_with(|| {
		let input = ChartInput::Solar {
			year: 1990,
			month: 2,
			day: 30,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		assert_noop!(
			BaziEngine::create_chart(RuntimeOrigin::signed(1), input),
			Error::<Test>::InvalidDate
		);

		// 直录长度不等于 4 一律拒绝
		let gans: BoundedVec<TianGan, _> =
			vec![TianGan::Jia, TianGan::Yi, TianGan::Bing].try_into().unwrap();
		let zhis: BoundedVec<DiZhi, _> =
			vec![DiZhi::Zi, DiZhi::Chou, DiZhi::Yin, DiZhi::Mao].try_into().unwrap();
		assert_noop!(
			BaziEngine::create_chart(RuntimeOrigin::signed(1), ChartInput::Direct { gans, zhis }),
			Error::<Test>::InvalidDirectInput
		);
	});
}

#[test]
fn chart_count_per_account_is_bounded() {
	new_test_ext().execute_with(|| {
		let input = ChartInput::Solar {
			year: 1990,
			month: 1,
			day: 1,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		for _ in 0..10 {
			assert_ok!(BaziEngine::create_chart(RuntimeOrigin::signed(1), input.clone()));
		}
		assert_noop!(
			BaziEngine::create_chart(RuntimeOrigin::signed(1), input.clone()),
			Error::<Test>::TooManyCharts
		);
		// 其他账户不受影响
		assert_ok!(BaziEngine::create_chart(RuntimeOrigin::signed(2), input));
	});
}

#[test]
fn delete_chart_enforces_ownership() {
	new_test_ext().execute_with(|| {
		let input = ChartInput::Solar {
			year: 1990,
			month: 1,
			day: 1,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		assert_ok!(BaziEngine::create_chart(RuntimeOrigin::signed(1), input));

		assert_noop!(
			BaziEngine::delete_chart(RuntimeOrigin::signed(2), 0),
			Error::<Test>::NotChartOwner
		);
		assert_noop!(
			BaziEngine::delete_chart(RuntimeOrigin::signed(1), 99),
			Error::<Test>::ChartNotFound
		);

		assert_ok!(BaziEngine::delete_chart(RuntimeOrigin::signed(1), 0));
		assert!(BaziEngine::chart_by_id(0).is_none());
		assert!(BaziEngine::user_charts(1).is_empty());
		System::assert_last_event(Event::ChartDeleted { owner: 1, chart_id: 0 }.into());
	});
}

#[test]
fn rpc_helpers_recompute_from_storage() {
	new_test_ext().execute_with(|| {
		assert!(BaziEngine::analysis_of(0).is_none());

		let input = ChartInput::Solar {
			year: 1990,
			month: 1,
			day: 1,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		assert_ok!(BaziEngine::create_chart(RuntimeOrigin::signed(1), input.clone()));

		let sz = calendar::resolve(1990, 1, 1, 12, 0, None).unwrap();
		assert_eq!(BaziEngine::analysis_of(0), Some(analyze(&sz)));
		assert_eq!(BaziEngine::classical_chart_of(0), Some(build_classical_chart(&sz)));

		// 免存储试算与落盘重算一致
		let (preview_analysis, preview_chart) = BaziEngine::preview(&input).unwrap();
		assert_eq!(preview_analysis, analyze(&sz));
		assert_eq!(preview_chart, build_classical_chart(&sz));
	});
}

#[test]
fn direct_and_solar_inputs_agree_on_same_pillars() {
	new_test_ext().execute_with(|| {
		let sz = calendar::resolve(1990, 1, 1, 12, 0, None).unwrap();
		let gans: BoundedVec<TianGan, _> = sz.gans().to_vec().try_into().unwrap();
		let zhis: BoundedVec<DiZhi, _> = sz.zhis().to_vec().try_into().unwrap();

		let solar = ChartInput::Solar {
			year: 1990,
			month: 1,
			day: 1,
			hour: 12,
			minute: 0,
			longitude: None,
		};
		let direct = ChartInput::Direct { gans, zhis };

		assert_eq!(BaziEngine::preview(&solar), BaziEngine::preview(&direct));
	});
}
