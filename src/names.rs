//! Vendor stat abbreviations to descriptive field names
//!
//! Keys are flat column keys as produced by [`crate::model::normalize`].
//! Several raw keys may map to the same descriptive field; the record
//! assembler keeps whichever one it sees first.

use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref NAME_MAP: HashMap<&'static str, &'static str> = FIELD_NAMES.iter().copied().collect();
}

const FIELD_NAMES: &[(&str, &str)] = &[
    // Player info
    ("nation", "nationality"),
    ("Nation", "nationality"),
    ("pos", "position"),
    ("Pos", "position"),
    ("age", "age"),
    ("Age", "age"),
    ("born", "birth_year"),
    ("Born", "birth_year"),
    // Playing time
    ("MP", "matches_played"),
    ("Starts", "starts"),
    ("Min", "minutes"),
    ("90s", "minutes_90s"),
    ("Mn/MP", "minutes_per_match"),
    ("Min%", "minutes_pct"),
    ("Starts_Starts", "starts"),
    ("Starts_Mn/Start", "minutes_per_start"),
    ("Starts_Compl", "complete_matches"),
    ("Subs_Subs", "sub_appearances"),
    ("Subs_Mn/Sub", "minutes_per_sub"),
    ("Subs_unSub", "unused_sub"),
    ("Team Success_PPM", "points_per_match"),
    ("Team Success_onG", "team_goals_on_pitch"),
    ("Team Success_onGA", "team_goals_against_on_pitch"),
    ("Team Success_+/-", "plus_minus"),
    ("Team Success_+/-90", "plus_minus_per_90"),
    ("Team Success_On-Off", "on_off"),
    ("Team Success (xG)_onxG", "team_xg_on_pitch"),
    ("Team Success (xG)_onxGA", "team_xga_on_pitch"),
    ("Team Success (xG)_xG+/-", "xg_plus_minus"),
    ("Team Success (xG)_xG+/-90", "xg_plus_minus_per_90"),
    ("Team Success (xG)_On-Off", "xg_on_off"),
    // Performance
    ("Gls", "goals"),
    ("Ast", "assists"),
    ("G+A", "goals_assists"),
    ("G-PK", "non_penalty_goals"),
    ("G+A-PK", "non_penalty_goals_assists"),
    ("PK", "penalty_goals"),
    ("PKatt", "penalty_attempts"),
    ("CrdY", "yellow_cards"),
    ("CrdR", "red_cards"),
    ("2CrdY", "second_yellow_cards"),
    // Expected
    ("xG", "expected_goals"),
    ("npxG", "non_penalty_xg"),
    ("xAG", "expected_assisted_goals"),
    ("xA", "expected_assists"),
    ("npxG+xAG", "non_penalty_xg_plus_xag"),
    ("xG+xAG", "xg_plus_xag"),
    ("A-xAG", "assists_minus_xag"),
    // Progression
    ("PrgC", "progressive_carries"),
    ("PrgP", "progressive_passes"),
    ("PrgR", "progressive_receptions"),
    ("Progression_PrgC", "progressive_carries"),
    ("Progression_PrgP", "progressive_passes"),
    ("Progression_PrgR", "progressive_receptions"),
    // Shooting
    ("Sh", "shots"),
    ("SoT", "shots_on_target"),
    ("SoT%", "shots_on_target_pct"),
    ("Sh/90", "shots_per_90"),
    ("SoT/90", "shots_on_target_per_90"),
    ("G/Sh", "goals_per_shot"),
    ("G/SoT", "goals_per_shot_on_target"),
    ("Dist", "avg_shot_distance"),
    ("FK", "free_kick_shots"),
    ("npxG/Sh", "non_penalty_xg_per_shot"),
    ("G-xG", "goals_minus_xg"),
    ("np:G-xG", "non_penalty_goals_minus_xg"),
    // Passing
    ("Cmp", "passes_completed"),
    ("Att", "passes_attempted"),
    ("Cmp%", "pass_completion_pct"),
    ("TotDist", "total_pass_distance"),
    ("PrgDist", "progressive_pass_distance"),
    ("KP", "key_passes"),
    ("1/3", "passes_final_third"),
    ("PPA", "passes_penalty_area"),
    ("CrsPA", "crosses_penalty_area"),
    // Pass types
    ("Pass Types_Live", "live_ball_passes"),
    ("Pass Types_Dead", "dead_ball_passes"),
    ("Pass Types_FK", "free_kick_passes"),
    ("Pass Types_TB", "through_balls"),
    ("Pass Types_Sw", "switches"),
    ("Pass Types_Crs", "crosses"),
    ("Pass Types_TI", "throw_ins"),
    ("Pass Types_CK", "corner_kicks"),
    ("Corner Kicks_In", "inswinging_corners"),
    ("Corner Kicks_Out", "outswinging_corners"),
    ("Corner Kicks_Str", "straight_corners"),
    ("Outcomes_Cmp", "pass_types_completed"),
    ("Outcomes_Off", "passes_offside"),
    ("Outcomes_Blocks", "passes_blocked_by_opponent"),
    // Shot and goal creation
    ("SCA_SCA", "shot_creating_actions"),
    ("SCA_SCA90", "sca_per_90"),
    ("SCA Types_PassLive", "sca_pass_live"),
    ("SCA Types_PassDead", "sca_pass_dead"),
    ("SCA Types_TO", "sca_take_ons"),
    ("SCA Types_Sh", "sca_shots"),
    ("SCA Types_Fld", "sca_fouls_drawn"),
    ("SCA Types_Def", "sca_defensive_actions"),
    ("GCA_GCA", "goal_creating_actions"),
    ("GCA_GCA90", "gca_per_90"),
    ("GCA Types_PassLive", "gca_pass_live"),
    ("GCA Types_PassDead", "gca_pass_dead"),
    ("GCA Types_TO", "gca_take_ons"),
    ("GCA Types_Sh", "gca_shots"),
    ("GCA Types_Fld", "gca_fouls_drawn"),
    ("GCA Types_Def", "gca_defensive_actions"),
    // Defense
    ("Tkl", "tackles"),
    ("TklW", "tackles_won"),
    ("Tackles_Tkl", "tackles"),
    ("Tackles_TklW", "tackles_won"),
    ("Tackles_Def 3rd", "tackles_def_3rd"),
    ("Tackles_Mid 3rd", "tackles_mid_3rd"),
    ("Tackles_Att 3rd", "tackles_att_3rd"),
    ("Challenges_Tkl", "dribblers_tackled"),
    ("Challenges_Att", "dribbles_challenged"),
    ("Challenges_Tkl%", "dribblers_tackled_pct"),
    ("Challenges_Lost", "challenges_lost"),
    ("Blocks_Blocks", "blocks"),
    ("Blocks_Sh", "shots_blocked"),
    ("Blocks_Pass", "passes_blocked"),
    ("Int", "interceptions"),
    ("Tkl+Int", "tackles_plus_interceptions"),
    ("Clr", "clearances"),
    ("Err", "errors"),
    // Possession
    ("Touches", "touches"),
    ("Touches_Touches", "touches"),
    ("Touches_Def Pen", "touches_def_pen"),
    ("Touches_Def 3rd", "touches_def_3rd"),
    ("Touches_Mid 3rd", "touches_mid_3rd"),
    ("Touches_Att 3rd", "touches_att_3rd"),
    ("Touches_Att Pen", "touches_att_pen"),
    ("Touches_Live", "touches_live_ball"),
    ("Take-Ons_Att", "take_ons_attempted"),
    ("Take-Ons_Succ", "take_ons_successful"),
    ("Take-Ons_Succ%", "take_ons_success_pct"),
    ("Take-Ons_Tkld", "take_ons_tackled"),
    ("Take-Ons_Tkld%", "take_ons_tackled_pct"),
    ("Carries", "carries"),
    ("Carries_Carries", "carries"),
    ("Carries_TotDist", "carry_distance"),
    ("Carries_PrgDist", "progressive_carry_distance"),
    ("Carries_PrgC", "progressive_carries"),
    ("Carries_1/3", "carries_final_third"),
    ("Carries_CPA", "carries_penalty_area"),
    ("Carries_Mis", "miscontrols"),
    ("Carries_Dis", "dispossessed"),
    ("Receiving_Rec", "passes_received"),
    ("Receiving_PrgR", "progressive_receptions"),
    // Miscellaneous
    ("Fls", "fouls_committed"),
    ("Fld", "fouls_drawn"),
    ("Off", "offsides"),
    ("Crs", "crosses"),
    ("PKwon", "penalties_won"),
    ("PKcon", "penalties_conceded"),
    ("OG", "own_goals"),
    ("Recov", "ball_recoveries"),
    ("Won", "aerial_duels_won"),
    ("Lost", "aerial_duels_lost"),
    ("Won%", "aerial_duels_won_pct"),
    ("Aerial Duels_Won", "aerial_duels_won"),
    ("Aerial Duels_Lost", "aerial_duels_lost"),
    ("Aerial Duels_Won%", "aerial_duels_won_pct"),
    // Goalkeeping
    ("GA", "goals_against"),
    ("GA90", "goals_against_per_90"),
    ("SoTA", "shots_on_target_against"),
    ("Saves", "saves"),
    ("Save%", "save_pct"),
    ("W", "wins"),
    ("D", "draws"),
    ("L", "losses"),
    ("CS", "clean_sheets"),
    ("CS%", "clean_sheet_pct"),
    ("Penalty Kicks_PKatt", "penalties_faced"),
    ("Penalty Kicks_PKA", "penalties_allowed"),
    ("Penalty Kicks_PKsv", "penalties_saved"),
    ("Penalty Kicks_PKm", "penalties_missed"),
    ("Penalty Kicks_Save%", "penalty_save_pct"),
    // Advanced goalkeeping
    ("Goals_GA", "goals_against"),
    ("Goals_PKA", "penalties_allowed"),
    ("Goals_FK", "free_kick_goals_against"),
    ("Goals_CK", "corner_goals_against"),
    ("Goals_OG", "own_goals_against"),
    ("PSxG", "post_shot_xg"),
    ("PSxG/SoT", "post_shot_xg_per_shot_on_target"),
    ("PSxG+/-", "post_shot_xg_plus_minus"),
    ("/90", "post_shot_xg_plus_minus_per_90"),
    ("Launched_Cmp", "launched_passes_completed"),
    ("Launched_Att", "launched_passes_attempted"),
    ("Launched_Cmp%", "launched_pass_completion_pct"),
    ("Passes_Att (GK)", "goalkeeper_passes_attempted"),
    ("Passes_Thr", "throws"),
    ("Passes_Launch%", "launch_pct"),
    ("Passes_AvgLen", "avg_pass_length"),
    ("Goal Kicks_Att", "goal_kicks"),
    ("Goal Kicks_Launch%", "goal_kick_launch_pct"),
    ("Goal Kicks_AvgLen", "avg_goal_kick_length"),
    ("Crosses_Opp", "crosses_faced"),
    ("Crosses_Stp", "crosses_stopped"),
    ("Crosses_Stp%", "crosses_stopped_pct"),
    ("Sweeper_#OPA", "defensive_actions_outside_box"),
    ("Sweeper_#OPA/90", "defensive_actions_outside_box_per_90"),
    ("Sweeper_AvgDist", "avg_defensive_action_distance"),
];

/// Map a flat field key to its descriptive name. Unknown keys pass through.
pub fn map_field(field: &str) -> &str {
    NAME_MAP.get(field).copied().unwrap_or(field)
}

/// Whether a flat key has a descriptive name
pub fn is_mapped(field: &str) -> bool {
    NAME_MAP.contains_key(field)
}

/// Number of recognized raw keys
pub fn mapped_key_count() -> usize {
    NAME_MAP.len()
}
