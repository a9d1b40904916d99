use log::{debug, info};

use crate::game::state::GameState;
use crate::game::types::Side;

/// Which side scores, if the ball has got past a paddle.
pub fn goal_scored_by(game_state: &GameState) -> Option<Side> {
    let ball = &game_state.ball;
    if ball.is_moving_left() && ball.position.x < game_state.left.position.x {
        Some(Side::Right)
    } else if !ball.is_moving_left() && ball.position.x > game_state.right.position.x {
        Some(Side::Left)
    } else {
        None
    }
}

/// Award a goal if one was scored, end the match when the goal limit is
/// reached, and serve again. Returns the scoring side.
pub fn check_goal(game_state: &mut GameState) -> Option<Side> {
    let scorer = goal_scored_by(game_state)?;
    let goals = game_state.score.add_goal(scorer);
    debug!(
        "Goal for player {} ({}-{})",
        scorer.player_number(),
        game_state.score.left,
        game_state.score.right
    );

    if game_state.max_score.is_some_and(|max| goals >= max) {
        info!(
            "Player {} wins the match {}-{}",
            scorer.player_number(),
            game_state.score.left,
            game_state.score.right
        );
        game_state.winner = Some(scorer);
    }

    game_state.reset_rally();
    Some(scorer)
}
