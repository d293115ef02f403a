//! # 干支历转换
//!
//! 公历出生时刻 → 四柱干支。引擎的日历协作方：
//! - 日柱：儒略日数对六十甲子取模（锚点 1949-10-01 甲子日）
//! - 年柱：以立春为界，(年 - 4) mod 10 / 12
//! - 月柱：以节（非气）为界定月支，五虎遁起月干
//! - 时柱：两小时一支，五鼠遁起时干
//! - 真太阳时：提供经度时按 (经度 - 120°) × 4 分/度 平移，仅影响时柱
//!
//! 节界取整日近似（1900-2100 区间误差不超过一日）；
//! 子时归属取现代派（23:00 起算次日子时、日柱不变）。

use crate::types::{DiZhi, GanZhi, SiZhu, TianGan};

/// 支持的公历年份范围
pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2100;

/// 真太阳时基准经度（东经 120°，1/10000 度）
const BASE_LONGITUDE_E4: i32 = 1_200_000;

/// 各月节（月界）近似日：小寒6 立春4 惊蛰6 清明5 立夏6 芒种6
/// 小暑7 立秋8 白露8 寒露8 立冬7 大雪7
const JIE_DAY: [u8; 13] = [0, 6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// 各月起始的月支（1 月起丑，12 月起子）
const MONTH_START_ZHI: [u8; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];

/// 公历日期有效性（含闰年二月）
pub fn validate_date(year: u16, month: u8, day: u8) -> bool {
	if !(MIN_YEAR..=MAX_YEAR).contains(&year) || month == 0 || month > 12 || day == 0 {
		return false;
	}
	day <= days_in_month(year, month)
}

fn is_leap_year(year: u16) -> bool {
	(year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 if is_leap_year(year) => 29,
		2 => 28,
		_ => 0,
	}
}

/// 儒略日数（格里历，整日）
pub fn julian_day(year: u16, month: u8, day: u8) -> i64 {
	let a = (14 - month as i64) / 12;
	let y = year as i64 + 4800 - a;
	let m = month as i64 + 12 * a - 3;
	day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// 日柱：1949-10-01（JDN 2433191）为甲子日
pub fn day_ganzhi(year: u16, month: u8, day: u8) -> Option<GanZhi> {
	if !validate_date(year, month, day) {
		return None;
	}
	let idx = ((julian_day(year, month, day) + 49) % 60) as u8;
	GanZhi::from_index(idx)
}

/// 年柱：立春（近似 2 月 4 日）前属上一年
pub fn year_ganzhi(year: u16, month: u8, day: u8) -> Option<GanZhi> {
	if !validate_date(year, month, day) {
		return None;
	}
	let eff_year = if month < 2 || (month == 2 && day < JIE_DAY[2]) {
		year.checked_sub(1)?
	} else {
		year
	};
	let base = eff_year.checked_sub(4)?;
	Some(GanZhi {
		gan: TianGan::from_index((base % 10) as u8)?,
		zhi: DiZhi::from_index((base % 12) as u8)?,
	})
}

/// 月支：过节换支，节前属上月
fn month_zhi(month: u8, day: u8) -> DiZhi {
	let idx = if day >= JIE_DAY[month as usize] {
		MONTH_START_ZHI[month as usize]
	} else {
		MONTH_START_ZHI[(month as usize + 11) % 12]
	};
	crate::types::ALL_ZHI[idx as usize]
}

/// 月柱：五虎遁（甲己之年丙作首）
pub fn month_ganzhi(year: u16, month: u8, day: u8) -> Option<GanZhi> {
	let year_gan = year_ganzhi(year, month, day)?.gan;
	let zhi = month_zhi(month, day);
	// 正月（寅）起干 = 年干序 % 5 * 2 + 2
	let first = (year_gan.index() % 5) * 2 + 2;
	let months_from_yin = (zhi.index() + 12 - 2) % 12;
	Some(GanZhi {
		gan: TianGan::from_index((first + months_from_yin) % 10)?,
		zhi,
	})
}

/// 时柱：五鼠遁（甲己还加甲）
pub fn hour_ganzhi(day_gan: TianGan, hour: u8) -> Option<GanZhi> {
	if hour > 23 {
		return None;
	}
	let zhi_idx = ((hour + 1) / 2) % 12;
	let zi_gan = (day_gan.index() % 5) * 2;
	Some(GanZhi {
		gan: TianGan::from_index((zi_gan + zhi_idx) % 10)?,
		zhi: DiZhi::from_index(zhi_idx)?,
	})
}

/// 真太阳时平移（分钟）：东经 120° 以西为负
pub fn solar_time_shift_minutes(longitude_e4: i32) -> i32 {
	(longitude_e4 - BASE_LONGITUDE_E4) * 4 / 10_000
}

/// 解析出生时刻为四柱
///
/// 提供经度时仅对时柱施加真太阳时修正：平移后的时刻若跨日，
/// 时干按跨日后的日干起遁，年月日三柱保持钟表时间不变。
pub fn resolve(
	year: u16,
	month: u8,
	day: u8,
	hour: u8,
	minute: u8,
	longitude: Option<i32>,
) -> Option<SiZhu> {
	if !validate_date(year, month, day) || hour > 23 || minute > 59 {
		return None;
	}

	let year_gz = year_ganzhi(year, month, day)?;
	let month_gz = month_ganzhi(year, month, day)?;
	let day_gz = day_ganzhi(year, month, day)?;

	// 时柱基准：经度平移后的分钟数，可能落入前一日或后一日
	let mut minutes_of_day =
		hour as i32 * 60 + minute as i32 + longitude.map_or(0, solar_time_shift_minutes);
	let mut hour_day_gan = day_gz.gan;
	if minutes_of_day < 0 {
		minutes_of_day += 24 * 60;
		// 前一日日干
		hour_day_gan = TianGan::from_index((day_gz.gan.index() + 9) % 10)?;
	} else if minutes_of_day >= 24 * 60 {
		minutes_of_day -= 24 * 60;
		hour_day_gan = TianGan::from_index((day_gz.gan.index() + 1) % 10)?;
	}
	let hour_gz = hour_ganzhi(hour_day_gan, (minutes_of_day / 60) as u8)?;

	Some(SiZhu { year: year_gz, month: month_gz, day: day_gz, hour: hour_gz })
}
