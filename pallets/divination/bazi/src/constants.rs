//! # 规则常量库
//!
//! 推演引擎的全部定数：藏干比例、合冲对照、季节乘数环、流通调整、
//! 温度系数、格局喜忌、十神功能权重矩阵、十六型功能栈、纳音、
//! 长生、旬空与神煞对照。
//!
//! 这些是与算法分离的可调参数，集中于此并打版本号，便于对照
//! 参考盘校准；算法代码一律引用具名常量，不内联字面量。

use crate::types::*;

/// 规则参数版本号
pub const RULESET_VERSION: u16 = 1;

// ============================================================================
// 十神关系
// ============================================================================

/// 计算某天干相对日主的十神
///
/// 纯函数：五行相生序距离定五类，阴阳同异定正偏。
pub fn shi_shen_of(day_master: TianGan, gan: TianGan) -> ShiShen {
	shi_shen_by_element(day_master, gan.wu_xing(), gan.is_yang())
}

/// 以五行 + 阴阳直接计算十神（会局转性时以局气代入干之五行）
pub fn shi_shen_by_element(day_master: TianGan, elem: WuXing, is_yang: bool) -> ShiShen {
	let d = day_master.wu_xing().sheng_distance(elem);
	let same_polarity = day_master.is_yang() == is_yang;
	match (d, same_polarity) {
		(0, true) => ShiShen::BiJian,
		(0, false) => ShiShen::JieCai,
		(1, true) => ShiShen::ShiShen,
		(1, false) => ShiShen::ShangGuan,
		(2, true) => ShiShen::PianCai,
		(2, false) => ShiShen::ZhengCai,
		(3, true) => ShiShen::QiSha,
		(3, false) => ShiShen::ZhengGuan,
		(_, true) => ShiShen::PianYin,
		(_, false) => ShiShen::ZhengYin,
	}
}

// ============================================================================
// 藏干
// ============================================================================

/// 地支藏干及固定比例（百分比，每支合计 100；首位为本气）
///
/// 辰藏干取"戊乙癸"主流派。
pub fn hidden_stems(zhi: DiZhi) -> &'static [(TianGan, u8)] {
	match zhi {
		DiZhi::Zi => &[(TianGan::Gui, 100)],
		DiZhi::Chou => &[(TianGan::Ji, 60), (TianGan::Gui, 30), (TianGan::Xin, 10)],
		DiZhi::Yin => &[(TianGan::Jia, 60), (TianGan::Bing, 30), (TianGan::Wu, 10)],
		DiZhi::Mao => &[(TianGan::Yi, 100)],
		DiZhi::Chen => &[(TianGan::Wu, 60), (TianGan::Yi, 30), (TianGan::Gui, 10)],
		DiZhi::Si => &[(TianGan::Bing, 60), (TianGan::Geng, 30), (TianGan::Wu, 10)],
		DiZhi::WuZ => &[(TianGan::Ding, 70), (TianGan::Ji, 30)],
		DiZhi::Wei => &[(TianGan::Ji, 60), (TianGan::Ding, 30), (TianGan::Yi, 10)],
		DiZhi::Shen => &[(TianGan::Geng, 60), (TianGan::Ren, 30), (TianGan::Wu, 10)],
		DiZhi::You => &[(TianGan::Xin, 100)],
		DiZhi::Xu => &[(TianGan::Wu, 60), (TianGan::Xin, 30), (TianGan::Ding, 10)],
		DiZhi::Hai => &[(TianGan::Ren, 70), (TianGan::Jia, 30)],
	}
}

/// 地支本气藏干（藏干表首位）
pub fn dominant_hidden_stem(zhi: DiZhi) -> TianGan {
	hidden_stems(zhi)[0].0
}

// ============================================================================
// 合冲对照
// ============================================================================

/// 天干五合：命中返回化气五行
pub fn gan_he(a: TianGan, b: TianGan) -> Option<WuXing> {
	use TianGan::*;
	match (a, b) {
		(Jia, Ji) | (Ji, Jia) => Some(WuXing::Tu),
		(Yi, Geng) | (Geng, Yi) => Some(WuXing::Jin),
		(Bing, Xin) | (Xin, Bing) => Some(WuXing::Shui),
		(Ding, Ren) | (Ren, Ding) => Some(WuXing::Mu),
		(Wu, Gui) | (Gui, Wu) => Some(WuXing::Huo),
		_ => None,
	}
}

/// 地支六合：命中返回化气五行
pub fn zhi_liu_he(a: DiZhi, b: DiZhi) -> Option<WuXing> {
	use DiZhi::*;
	match (a, b) {
		(Zi, Chou) | (Chou, Zi) => Some(WuXing::Tu),
		(Yin, Hai) | (Hai, Yin) => Some(WuXing::Mu),
		(Mao, Xu) | (Xu, Mao) => Some(WuXing::Huo),
		(Chen, You) | (You, Chen) => Some(WuXing::Jin),
		(Si, Shen) | (Shen, Si) => Some(WuXing::Shui),
		(WuZ, Wei) | (Wei, WuZ) => Some(WuXing::Tu),
	_ => None,
	}
}

/// 地支六冲
pub fn zhi_chong(a: DiZhi, b: DiZhi) -> bool {
	(a.index() + 6) % 12 == b.index()
}

/// 方局（三会）三支组，按检查序排列；命中即统一为对应五行
pub const FANG_JU: [([DiZhi; 3], WuXing); 4] = [
	([DiZhi::Yin, DiZhi::Mao, DiZhi::Chen], WuXing::Mu),
	([DiZhi::Si, DiZhi::WuZ, DiZhi::Wei], WuXing::Huo),
	([DiZhi::Shen, DiZhi::You, DiZhi::Xu], WuXing::Jin),
	([DiZhi::Hai, DiZhi::Zi, DiZhi::Chou], WuXing::Shui),
];

/// 三合局三支组，按检查序排列
pub const SAN_HE_JU: [([DiZhi; 3], WuXing); 4] = [
	([DiZhi::Shen, DiZhi::Zi, DiZhi::Chen], WuXing::Shui),
	([DiZhi::Hai, DiZhi::Mao, DiZhi::Wei], WuXing::Mu),
	([DiZhi::Yin, DiZhi::WuZ, DiZhi::Xu], WuXing::Huo),
	([DiZhi::Si, DiZhi::You, DiZhi::Chou], WuXing::Jin),
];

// ============================================================================
// 交互乘数与补偿
// ============================================================================

/// 天干合而不化：双方受缚乘数（百分比）
pub const GAN_BOUND_PCT: u32 = 70;
/// 地支六合化气与月令不符：未缚参与者乘数
pub const ZHI_HE_MISS_PCT: u32 = 70;
/// 相邻柱六冲：双方乘数
pub const CHONG_ADJ_PCT: u32 = 60;
/// 隔柱六冲：双方乘数
pub const CHONG_FAR_PCT: u32 = 85;

/// 每检出一组地支六合的 Ni 补偿增量（不论成败）
pub const NI_COMP_HE: u32 = 3_000;
/// 四支尽数入合时的一次性"全合"补偿（替代累计值）
pub const NI_COMP_FULL_HE: u32 = 10_000;
/// 相邻柱六冲的 Ne 补偿增量
pub const NE_COMP_CHONG_ADJ: u32 = 5_000;
/// 隔柱六冲的 Ne 补偿增量
pub const NE_COMP_CHONG_FAR: u32 = 2_000;
/// 四支尽数犯冲时的一次性"全冲"补偿（替代累计值）
pub const NE_COMP_FULL_CHONG: u32 = 15_000;

// ============================================================================
// 季节乘数与流通调整
// ============================================================================

/// 五档季节乘数环（百分比），以当令五行为圆心、按相生序展开：
/// 当令 150、令生 120、隔位 90、再隔 70、生令 80
pub const SEASON_RING: [u32; 5] = [150, 120, 90, 70, 80];

/// 查询某五行在给定当令五行下的季节乘数
pub fn season_mult(seasonal: WuXing, elem: WuXing) -> u32 {
	SEASON_RING[seasonal.sheng_distance(elem) as usize]
}

/// 干支流通调整（百分比）：
/// [干支同气, 支生干, 干生支, 支克干, 干克支]
///
/// 月柱一套、余三柱一套；月令权重更重，扶抑皆被放大。
pub const FLOW_MULTS: [u32; 5] = [120, 115, 90, 70, 85];
pub const FLOW_MULTS_MONTH: [u32; 5] = [130, 125, 80, 50, 75];

/// 四支藏干皆无同气之根的"虚浮"天干衰减（百分比）
pub const ROOTLESS_PCT: u32 = 60;

/// 藏干片段并非透干且非局气时的折减（百分比）
pub const HIDDEN_DISCOUNT_PCT: u32 = 80;

// ============================================================================
// 温度（调候）
// ============================================================================

/// 十干温度系数，按天干序（甲..癸）
pub const TEMP_COEFF: [i32; 10] = [2, 1, 10, 8, 1, 0, -2, -4, -10, -8];

/// 调候触发的温度绝对值阈值（能量厘点 × 系数）
pub const CLIMATE_TEMP_THRESHOLD: i64 = 1_500;

/// 调候元素占比上限（千分比）：超过则无需调候
pub const CLIMATE_SHARE_LIMIT_PM: u64 = 250;

/// 炎燥三支
pub const HOT_TRIAD: [DiZhi; 3] = [DiZhi::Si, DiZhi::WuZ, DiZhi::Wei];
/// 寒凝三支
pub const COLD_TRIAD: [DiZhi; 3] = [DiZhi::Hai, DiZhi::Zi, DiZhi::Chou];

// ============================================================================
// 强弱分档（千分比阈值）
// ============================================================================

pub const STRENGTH_JI_WANG_PM: u16 = 900;
pub const STRENGTH_QIANG_PM: u16 = 720;
pub const STRENGTH_ZHONG_HE_PM: u16 = 500;
pub const STRENGTH_JI_RUO_PM: u16 = 240;

// ============================================================================
// 格局喜忌
// ============================================================================

/// 十神顺位（扶抑候选排序的第二键，越大越优）
pub const NICE_RANK: [u8; 10] = [
	1, // 比肩
	0, // 劫财
	7, // 食神
	2, // 伤官
	5, // 偏财
	6, // 正财
	4, // 七杀
	9, // 正官
	3, // 偏印
	8, // 正印
];

/// 格局喜忌：按 `GeJu` 序，(身强喜, 身强忌, 身弱喜, 身弱忌)，
/// 值为 `ShiShenCategory::bit` 掩码
pub const GE_JU_RULES: [(u8, u8, u8, u8); 11] = [
	// 正官格：强喜财官，忌印比；弱喜印比，忌财官
	(0b01100, 0b10001, 0b10001, 0b01100),
	// 七杀格：强喜食伤制杀与财，忌比；弱喜印化杀，忌财杀
	(0b00110, 0b00001, 0b10000, 0b01100),
	// 正财格：强喜财官食伤，忌比印；弱喜比印，忌食伤财
	(0b01110, 0b10001, 0b10001, 0b00110),
	// 偏财格：同正财
	(0b01110, 0b10001, 0b10001, 0b00110),
	// 正印格：强喜财损印与食伤，忌印；弱喜官印，忌财
	(0b00110, 0b10000, 0b11000, 0b00100),
	// 偏印格：强喜财食，忌印比；弱喜官印，忌食财
	(0b00110, 0b10001, 0b11000, 0b00110),
	// 食神格：强喜食伤生财，忌印；弱喜印比，忌官杀
	(0b00110, 0b10000, 0b10001, 0b01000),
	// 伤官格：强喜财泄食伤，忌官；弱喜印制伤，忌官杀
	(0b00110, 0b01000, 0b10001, 0b01000),
	// 建禄格：强喜官杀财泄克，忌比印；弱喜印比，忌官杀
	(0b01100, 0b10001, 0b10001, 0b01000),
	// 月刃格：同建禄而更忌比劫
	(0b01100, 0b10001, 0b10001, 0b01001),
	// 专旺格：顺其旺势，喜比印食伤，忌官杀财
	(0b10011, 0b01100, 0b10011, 0b01100),
];

// ============================================================================
// 认知功能映射参数
// ============================================================================

/// 日主能量放大（百分比），仅第二遍加权投影使用
pub const DAY_MASTER_AMP_PCT: u32 = 130;

/// 显性占比切点（千分比）
pub const MANIFEST_PM: u16 = 150;
/// 强制潜性占比下限（千分比）
pub const LATENT_PM: u16 = 100;

/// 比印占比低于此值时触发防御替换向量（千分比）
pub const WEAK_DEFENSE_PM: u16 = 300;
/// 比印占比高于此值时触发进攻替换向量（千分比）
pub const STRONG_ATTACK_PM: u16 = 700;

/// 物理贡献流权重（百分比）
pub const PHYS_STREAM_PCT: u64 = 60;
/// 社会贡献流权重（百分比）
pub const SOCIAL_STREAM_PCT: u64 = 40;
/// 十神与格局基准十神一致时的社会流加成（百分比）
pub const PATTERN_BOOST_PCT: u64 = 125;

/// 十神 → 八维功能权重向量，按 `ALL_SHI_SHEN` × `ALL_FUNCTIONS` 序，
/// 每行合计 100
pub const FUNC_WEIGHTS: [[u32; 8]; 10] = [
	// 比肩            Te  Ti  Fe  Fi  Se  Si  Ne  Ni
	[10, 30, 5, 25, 15, 10, 5, 0],
	// 劫财
	[15, 10, 5, 10, 35, 5, 15, 5],
	// 食神
	[5, 10, 15, 20, 5, 5, 30, 10],
	// 伤官
	[10, 5, 25, 5, 20, 0, 30, 5],
	// 偏财
	[25, 5, 10, 0, 35, 5, 15, 5],
	// 正财
	[30, 5, 5, 10, 5, 35, 5, 5],
	// 七杀
	[25, 5, 5, 5, 35, 0, 5, 20],
	// 正官
	[30, 10, 20, 5, 0, 25, 0, 10],
	// 偏印
	[0, 25, 5, 15, 0, 10, 10, 35],
	// 正印
	[5, 10, 15, 15, 0, 35, 5, 15],
];

/// 防御替换向量：身弱受克（七杀/伤官/正官）时内收自保
pub const DEFENSIVE_VEC: [u32; 8] = [0, 10, 10, 30, 0, 30, 5, 15];
/// 进攻替换向量：身强逢（偏印/劫财/比肩）时外放争夺
pub const AGGRESSIVE_VEC: [u32; 8] = [30, 5, 5, 0, 35, 0, 15, 10];

/// 十六型功能栈（主、辅、三、劣），表序即平局裁定序
pub const MBTI_STACKS: [(MbtiType, [CognitiveFunction; 4]); 16] = {
	use CognitiveFunction::*;
	use MbtiType::*;
	[
		(Intj, [Ni, Te, Fi, Se]),
		(Infj, [Ni, Fe, Ti, Se]),
		(Istj, [Si, Te, Fi, Ne]),
		(Isfj, [Si, Fe, Ti, Ne]),
		(Intp, [Ti, Ne, Si, Fe]),
		(Istp, [Ti, Se, Ni, Fe]),
		(Infp, [Fi, Ne, Si, Te]),
		(Isfp, [Fi, Se, Ni, Te]),
		(Entj, [Te, Ni, Se, Fi]),
		(Estj, [Te, Si, Ne, Fi]),
		(Enfj, [Fe, Ni, Se, Ti]),
		(Esfj, [Fe, Si, Ne, Ti]),
		(Entp, [Ne, Ti, Fe, Si]),
		(Enfp, [Ne, Fi, Te, Si]),
		(Estp, [Se, Ti, Fe, Ni]),
		(Esfp, [Se, Fi, Te, Ni]),
	]
};

// ============================================================================
// 纳音
// ============================================================================

/// 三十纳音名，六十甲子两两一名（索引 = 甲子序 / 2）
pub const NAYIN_NAMES: [&str; 30] = [
	"海中金", "炉中火", "大林木", "路旁土", "剑锋金",
	"山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
	"泉中水", "屋上土", "霹雳火", "松柏木", "长流水",
	"沙中金", "山下火", "平地木", "壁上土", "金箔金",
	"覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木",
	"大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// 纳音索引：干支阴阳错配（直录盘可能出现）无纳音
pub fn nayin_index(gz: &GanZhi) -> Option<u8> {
	if gz.gan.is_yang() != (gz.zhi.index() % 2 == 0) {
		return None;
	}
	Some(gz.index() / 2)
}

pub fn nayin_name(idx: u8) -> Option<&'static str> {
	NAYIN_NAMES.get(idx as usize).copied()
}

// ============================================================================
// 十二长生与旬空
// ============================================================================

/// 十干长生起点与顺逆（阳顺阴逆）
fn chang_sheng_origin(gan: TianGan) -> (DiZhi, bool) {
	match gan {
		TianGan::Jia => (DiZhi::Hai, true),
		TianGan::Yi => (DiZhi::WuZ, false),
		TianGan::Bing | TianGan::Wu => (DiZhi::Yin, true),
		TianGan::Ding | TianGan::Ji => (DiZhi::You, false),
		TianGan::Geng => (DiZhi::Si, true),
		TianGan::Xin => (DiZhi::Zi, false),
		TianGan::Ren => (DiZhi::Shen, true),
		TianGan::Gui => (DiZhi::Mao, false),
	}
}

/// 某天干在某地支上的十二长生阶段
pub fn chang_sheng_stage(gan: TianGan, zhi: DiZhi) -> ChangSheng {
	let (origin, forward) = chang_sheng_origin(gan);
	let steps = if forward {
		(zhi.index() + 12 - origin.index()) % 12
	} else {
		(origin.index() + 12 - zhi.index()) % 12
	};
	ALL_CHANG_SHENG[steps as usize]
}

/// 自坐：地支相对本气藏干的长生阶段，仅以地支为键
pub fn zi_zuo(zhi: DiZhi) -> ChangSheng {
	chang_sheng_stage(dominant_hidden_stem(zhi), zhi)
}

/// 旬空：本柱所在旬缺席的两支
pub fn kong_wang(gz: &GanZhi) -> (DiZhi, DiZhi) {
	// 旬首支 = 支 - 干（mod 12），空亡为旬首支前两位
	let start = (gz.zhi.index() + 12 - (gz.gan.index() % 12)) % 12;
	(ALL_ZHI[((start + 10) % 12) as usize], ALL_ZHI[((start + 11) % 12) as usize])
}

// ============================================================================
// 神煞对照
// ============================================================================

/// 天乙贵人：日干 → 两贵支
pub fn tian_yi_targets(day_gan: TianGan) -> [DiZhi; 2] {
	use DiZhi::*;
	match day_gan {
		TianGan::Jia | TianGan::Wu => [Chou, Wei],
		TianGan::Yi | TianGan::Ji => [Zi, Shen],
		TianGan::Bing | TianGan::Ding => [Hai, You],
		TianGan::Geng | TianGan::Xin => [WuZ, Yin],
		TianGan::Ren | TianGan::Gui => [Mao, Si],
	}
}

/// 文昌贵人：日干 → 支
pub fn wen_chang_target(day_gan: TianGan) -> DiZhi {
	use DiZhi::*;
	match day_gan {
		TianGan::Jia => Si,
		TianGan::Yi => WuZ,
		TianGan::Bing | TianGan::Wu => Shen,
		TianGan::Ding | TianGan::Ji => You,
		TianGan::Geng => Hai,
		TianGan::Xin => Zi,
		TianGan::Ren => Yin,
		TianGan::Gui => Mao,
	}
}

/// 禄神：日干 → 禄支
pub fn lu_shen_target(day_gan: TianGan) -> DiZhi {
	use DiZhi::*;
	match day_gan {
		TianGan::Jia => Yin,
		TianGan::Yi => Mao,
		TianGan::Bing | TianGan::Wu => Si,
		TianGan::Ding | TianGan::Ji => WuZ,
		TianGan::Geng => Shen,
		TianGan::Xin => You,
		TianGan::Ren => Hai,
		TianGan::Gui => Zi,
	}
}

/// 羊刃：仅阳干有刃
pub fn yang_ren_target(day_gan: TianGan) -> Option<DiZhi> {
	use DiZhi::*;
	match day_gan {
		TianGan::Jia => Some(Mao),
		TianGan::Bing | TianGan::Wu => Some(WuZ),
		TianGan::Geng => Some(You),
		TianGan::Ren => Some(Zi),
		_ => None,
	}
}

/// 三合局组别索引（申子辰 0 / 亥卯未 1 / 寅午戌 2 / 巳酉丑 3）
fn san_he_group(zhi: DiZhi) -> usize {
	use DiZhi::*;
	match zhi {
		Shen | Zi | Chen => 0,
		Hai | Mao | Wei => 1,
		Yin | WuZ | Xu => 2,
		Si | You | Chou => 3,
	}
}

/// 桃花（咸池），以年支或日支三合组起
pub fn tao_hua_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::You, DiZhi::Zi, DiZhi::Mao, DiZhi::WuZ][san_he_group(anchor)]
}

/// 驿马
pub fn yi_ma_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::Yin, DiZhi::Si, DiZhi::Shen, DiZhi::Hai][san_he_group(anchor)]
}

/// 华盖
pub fn hua_gai_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::Chen, DiZhi::Wei, DiZhi::Xu, DiZhi::Chou][san_he_group(anchor)]
}

/// 将星
pub fn jiang_xing_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::Zi, DiZhi::Mao, DiZhi::WuZ, DiZhi::You][san_he_group(anchor)]
}

/// 劫煞
pub fn jie_sha_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::Si, DiZhi::Shen, DiZhi::Hai, DiZhi::Yin][san_he_group(anchor)]
}

/// 亡神
pub fn wang_shen_target(anchor: DiZhi) -> DiZhi {
	[DiZhi::Hai, DiZhi::Yin, DiZhi::Si, DiZhi::Shen][san_he_group(anchor)]
}

/// 红鸾：年支起，子年在卯逆行
pub fn hong_luan_target(year_zhi: DiZhi) -> DiZhi {
	ALL_ZHI[((3 + 12 - year_zhi.index()) % 12) as usize]
}

/// 天喜：红鸾对宫
pub fn tian_xi_target(year_zhi: DiZhi) -> DiZhi {
	ALL_ZHI[((hong_luan_target(year_zhi).index() + 6) % 12) as usize]
}

/// 孤辰 / 寡宿：年支季组 → (孤辰支, 寡宿支)
pub fn gu_chen_gua_su(year_zhi: DiZhi) -> (DiZhi, DiZhi) {
	use DiZhi::*;
	match year_zhi {
		Hai | Zi | Chou => (Yin, Xu),
		Yin | Mao | Chen => (Si, Chou),
		Si | WuZ | Wei => (Shen, Chen),
		Shen | You | Xu => (Hai, Wei),
	}
}

/// 月德贵人：月支三合组 → 天干
pub fn yue_de_target(month_zhi: DiZhi) -> TianGan {
	[TianGan::Ren, TianGan::Jia, TianGan::Bing, TianGan::Geng][san_he_group(month_zhi)]
}

/// 天德贵人目标：干或支（按月支十二位）
pub enum GanOrZhi {
	Gan(TianGan),
	Zhi(DiZhi),
}

pub fn tian_de_target(month_zhi: DiZhi) -> GanOrZhi {
	use GanOrZhi::*;
	match month_zhi {
		DiZhi::Yin => Gan(TianGan::Ding),
		DiZhi::Mao => Zhi(DiZhi::Shen),
		DiZhi::Chen => Gan(TianGan::Ren),
		DiZhi::Si => Gan(TianGan::Xin),
		DiZhi::WuZ => Zhi(DiZhi::Hai),
		DiZhi::Wei => Gan(TianGan::Jia),
		DiZhi::Shen => Gan(TianGan::Gui),
		DiZhi::You => Zhi(DiZhi::Yin),
		DiZhi::Xu => Gan(TianGan::Bing),
		DiZhi::Hai => Gan(TianGan::Yi),
		DiZhi::Zi => Zhi(DiZhi::Si),
		DiZhi::Chou => Gan(TianGan::Geng),
	}
}

/// 金舆：日干 → 支
pub fn jin_yu_target(day_gan: TianGan) -> DiZhi {
	use DiZhi::*;
	match day_gan {
		TianGan::Jia => Chen,
		TianGan::Yi => Si,
		TianGan::Bing | TianGan::Wu => Wei,
		TianGan::Ding | TianGan::Ji => Shen,
		TianGan::Geng => Xu,
		TianGan::Xin => Hai,
		TianGan::Ren => Chou,
		TianGan::Gui => Yin,
	}
}

/// 魁罡四日（六十甲子索引）
pub const KUI_GANG_DAYS: [u8; 4] = [16, 46, 28, 34]; // 庚辰 庚戌 壬辰 戊戌

/// 十灵日
pub const SHI_LING_DAYS: [u8; 10] = [
	40, // 甲辰
	11, // 乙亥
	52, // 丙辰
	33, // 丁酉
	54, // 戊午
	46, // 庚戌
	26, // 庚寅
	47, // 辛亥
	38, // 壬寅
	19, // 癸未
];

/// 进神四日
pub const JIN_SHEN_DAYS: [u8; 4] = [0, 30, 15, 45]; // 甲子 甲午 己卯 己酉

/// 阴差阳错十二日
pub const YIN_CHA_YANG_CUO_DAYS: [u8; 12] = [
	12, // 丙子
	42, // 丙午
	13, // 丁丑
	43, // 丁未
	14, // 戊寅
	44, // 戊申
	27, // 辛卯
	57, // 辛酉
	28, // 壬辰
	58, // 壬戌
	29, // 癸巳
	59, // 癸亥
];

/// 孤鸾八日
pub const GU_LUAN_DAYS: [u8; 8] = [
	41, // 乙巳
	53, // 丁巳
	47, // 辛亥
	44, // 戊申
	50, // 甲寅
	54, // 戊午
	48, // 壬子
	42, // 丙午
];
